//! Navigation Context - 视图路由与应用外壳

mod errors;
mod icons;
mod routes;
mod shell;

pub use errors::NavigationError;
pub use icons::{Icon, IconRegistry};
pub use routes::{find_by_name, resolve, View, ViewRoute, ROUTES};
pub use shell::{AppShell, MountedApp};
