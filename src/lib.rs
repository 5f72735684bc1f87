//! codeview - 布局引擎与代码着色渲染库
//!
//! 模块结构：
//! - ui: 几何、绘制上下文、布局容器（Container, LinearLayout）与后端
//! - syntax: Go 词法 token
//! - views: 视图层（CodeView）
//! - services: 服务层（Settings）
//! - app: 应用层（ColorScheme）

pub mod app;
pub mod services;
pub mod syntax;
pub mod ui;
pub mod views;
