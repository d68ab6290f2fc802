//! Go board coordinate formats and conversions between them.
//!
//! For a 19x19 board:
//!
//! | Format    | upper-left | upper-right | pass     |
//! |-----------|------------|-------------|----------|
//! | canonical | (0, 0)     | (0, 18)     | `None`   |
//! | flat      | 0          | 18          | 361      |
//! | sgf       | `aa`       | `sa`        | `""`     |
//! | kgs       | `A19`      | `T19`       | `pass`   |
//! | gtp       | (1, 19)    | (19, 19)    | Pass     |

mod convert;
mod error;
mod flat;
mod gtp;
mod kgs;
mod sgf;
mod types;

pub use convert::{CoordFormat, CoordValue, all_formats, convert, convert_text};
pub use error::{CoordError, CoordErrorKind, CoordResult};
pub use flat::{from_flat, to_flat};
pub use gtp::{GtpVertex, from_gtp, to_gtp};
pub use kgs::{from_kgs, to_kgs};
pub use sgf::{from_sgf, to_sgf};
pub use types::{BoardSize, Coord, KGS_COLUMNS, PASS_TEXT, SGF_COLUMNS};
