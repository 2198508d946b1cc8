pub const APP_NAME: &str = "meanframe";

pub const OUTPUT_FILE: &str = "mean_output.png";
pub const ERROR_LOG_FILE: &str = "error.log";
pub const DEBUG_LOG_FILE: &str = "debug.log";

pub const DISPLAY_WINDOW_TITLE: &str = "Mean Frame";
