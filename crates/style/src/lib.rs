pub mod absolute;
pub mod alignment;
pub mod dimension;
pub mod flex;
pub mod grid;
pub mod paint;
pub mod parsers;
pub mod relative;
pub mod stack;

pub use absolute::{AbsoluteBounds, AbsoluteLayoutFlags};
pub use alignment::{Alignment, LayoutOptions};
pub use flex::{FlexBasis, FlexConfig, FlexDirection, FlexItem, FlexWrap, JustifyContent};
pub use grid::{GridDefinition, GridLength, GridPlacement};
pub use paint::Paint;
pub use parsers::StyleParseError;
pub use relative::LayoutProperty;
pub use stack::{StackConfig, StackOrientation};
