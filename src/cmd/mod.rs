/// Single-buffer decode command.
pub mod decode;
/// Key dump rendering command.
pub mod dump;
/// Four-character code conversion command.
pub mod fourcc;
mod util;
