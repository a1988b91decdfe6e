pub mod codec;
mod compression;
mod dump;
mod error;
mod fourcc;
mod record;
mod value;

/// Compression detection result.
pub use compression::Compression;
/// Key dump table rendering.
pub use dump::{DumpRow, RenderOptions, dump_rows, render_dump};
/// Error, report, and result types.
pub use error::{ErrorReport, Result, SmcError, error_with_title};
/// Four-character code packing.
pub use fourcc::{FourCc, fourcc, fourcc_string};
/// Key records, dump files, and hex helpers.
pub use record::{DumpFile, SmcRecord, hex_string, parse_hex};
/// Type-tag dispatch and decoded values.
pub use value::{DataType, SmcValue, value_for_data};
