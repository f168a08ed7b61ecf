pub mod error;
pub mod image_name;
pub mod session;

pub use error::AppError;
pub use image_name::{DEMO_PREFIX, IMAGE_EXTENSION, ImageNameRule, is_valid};
pub use session::{
    NEXT_STEP_KEYWORD, QUIT_KEYWORD, RequestOutcome, SessionExit, SessionOutcome, TopLevelInput,
};
