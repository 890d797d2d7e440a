//! Client for a hosted pretrained text-classification model.
//!
//! [`api::InferenceApi`] speaks the HTTP inference protocol (`POST` of
//! `{"inputs": text}` to the model endpoint); [`remote::RemoteClassifier`]
//! adapts it to the [`moodlog_core::classifier::EmotionClassifier`] seam.

pub mod api;
pub mod remote;

pub use remote::RemoteClassifier;
