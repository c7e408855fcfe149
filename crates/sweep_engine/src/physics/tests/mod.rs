//! Cross-module physics scenarios: solver and resolver against small scenes

mod sliding_integration;
