pub const HEADER: &str = "All Movies";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No movies found.";
pub const PROMPT: &str = "Search (blank line = popular, exactly :q = quit)";
pub const QUIT_COMMAND: &str = ":q";
