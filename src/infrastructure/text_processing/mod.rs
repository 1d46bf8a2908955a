mod lopdf_extractor;
mod mock_extractor;

pub use lopdf_extractor::LopdfExtractor;
pub use mock_extractor::MockTextExtractor;
