mod helpers;
mod integration {
    // groups files under tests/integration/
    mod cli_basic;
    mod config_precedence;
    mod play_session;
    mod records_workflow;
}
