pub const RANK_CMD: &str = "rank";
pub const DEFAULT_OUT: &str = "ordered.txt";
pub const BLOWUP_SUFFIX: &str = ".blowup";
pub const DEFAULT_WINDOW_RADIUS: u32 = 10;
pub const DEFAULT_BLOWUP_THRESHOLD: f64 = 1.0 / 3.0;
