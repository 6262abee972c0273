pub struct Config {
    /// Inverts the selection: emit lines that do NOT contain an address
    /// inside any configured network.
    pub invert: bool,
}
