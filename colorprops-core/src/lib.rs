#![warn(missing_docs)]

//! # colorprops core
//!
//! Loads color theme properties (`Color.properties`) and converts their
//! values into [vello::peniko::Color].
//!
//! ## Overview
//!
//! - **[ConfigurationProperties](store::ConfigurationProperties)**: the loaded,
//!   read-only store with typed color access
//! - **[PropertyStore](properties::PropertyStore)**: the key/value map and its
//!   properties-text parser
//! - **[LoaderConfig](config::LoaderConfig)**: execution mode and search paths
//! - **[parse_hex_color](color::parse_hex_color)**: hex string to color
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use colorprops_core::config::LoaderConfig;
//! use colorprops_core::store::ConfigurationProperties;
//! use vello::peniko::Color;
//!
//! let roots = vec![PathBuf::from("/opt/app/Framework"), PathBuf::from("/opt/app/Features")];
//! let loader = LoaderConfig::from_env_or_default();
//! let colors = ConfigurationProperties::from_root_dirs_with(&roots, &loader).unwrap();
//!
//! let background = colors.read_color_or("Color.background", Color::WHITE);
//! ```

/// Contains hex color parsing and formatting.
pub mod color;
/// Contains the [config::LoaderConfig] struct and [config::ExecutionMode].
pub mod config;
/// Contains the [error::ConfigError] type.
pub mod error;
/// Contains the [properties::PropertyStore] and its text format.
pub mod properties;
/// Contains the [resource::ResourceFile] trait.
pub mod resource;
/// Contains the [store::ConfigurationProperties] store.
pub mod store;
