#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Number of `-q` flags given.
    ///
    /// `1` hides the banner and headers, `2` prints verdict values only.
    pub quiet: u8,
    pub no_banner: bool,
    /// Turns any verdict that does not hold into a failing exit code.
    pub strict: bool,
}
