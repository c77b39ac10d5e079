pub const APP_TITLE: &str = "URL Shortener";
pub const TAB_SHORTEN_LABEL: &str = "Shorten URL";
pub const TAB_HISTORY_LABEL: &str = "History";
pub const INPUT_PLACEHOLDER: &str = "Enter your URL here";
pub const SUBMIT_LABEL: &str = "Shorten";
pub const COPY_LABEL: &str = "Copy";
pub const COPY_TITLE: &str = "Copy to clipboard";
pub const OPEN_LINK_TITLE: &str = "Open link";
pub const LOADING_TEXT: &str = "Loading...";
pub const REDIRECT_PENDING_TITLE: &str = "Redirecting...";
pub const REDIRECT_PENDING_TEXT: &str = "Please wait while we redirect you to the original URL.";
pub const REDIRECT_ERROR_TITLE: &str = "Error";
