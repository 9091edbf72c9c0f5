mod handler_state;
