//! Professional profile photo enhancer.
//!
//! Takes an uploaded photo, builds an editing instruction from a few
//! user-chosen options and asks Gemini for a retouched version.
//!
//! ```no_run
//! use profile_photo_enhancer::{encode, Enhancer, EnhancementOptions, GeminiClient, SourceImage};
//!
//! # async fn run() -> Result<(), profile_photo_enhancer::EnhanceError> {
//! let enhancer = Enhancer::new(GeminiClient::builder().api_key("my-key").build());
//! let photo = SourceImage::new(std::fs::read("me.jpg").unwrap(), "image/jpeg");
//! let image = enhancer
//!     .enhance(&encode(&photo)?, &EnhancementOptions::default())
//!     .await?;
//! println!("{}", image.data_url());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod encoder;
pub mod enhance;
pub mod error;
pub mod gemini;
pub mod options;
pub mod page;
pub mod prompt;
pub mod server;

pub use config::Config;
pub use encoder::{encode, EncodedPayload, SourceImage};
pub use enhance::{EnhancedImage, Enhancer};
pub use error::{ApiError, EnhanceError, TransportError};
pub use gemini::{GeminiClient, GenerateContent};
pub use options::{BackgroundStyle, EnhancementOptions};
