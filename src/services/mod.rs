//! 服务层模块
//!
//! - config: 从 JSON 加载渲染设置

pub mod config;

pub use config::{ConfigError, Settings, Typography};
