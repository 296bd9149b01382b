mod config_flow;
mod form_session;
