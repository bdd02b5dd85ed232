pub const LOGO: &str = "◆";
pub const SEP_RIGHT: &str = "";
pub const SEARCH: &str = "⌕";
pub const HISTORY: &str = "↺";
pub const ARROW: &str = "→";
