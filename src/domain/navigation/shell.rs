//! Navigation Context - 应用外壳引导
//!
//! 挂载前注册全部图标，挂载后的 `MountedApp` 只读。

use super::errors::NavigationError;
use super::icons::{Icon, IconRegistry};
use super::routes::{self, View, ViewRoute, ROUTES};

/// 尚未挂载的应用外壳
#[derive(Debug, Default)]
pub struct AppShell {
    icons: IconRegistry,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册默认图标集合
    pub fn bootstrap() -> Result<Self, NavigationError> {
        let mut shell = Self::new();
        for icon in Icon::ALL {
            shell.register_icon(icon)?;
        }
        Ok(shell)
    }

    pub fn register_icon(&mut self, icon: Icon) -> Result<(), NavigationError> {
        self.icons.register(icon)
    }

    pub fn mount(self) -> MountedApp {
        tracing::info!(
            icons = self.icons.len(),
            routes = ROUTES.len(),
            "Application shell mounted"
        );
        MountedApp { icons: self.icons }
    }
}

/// 已挂载的应用
#[derive(Debug)]
pub struct MountedApp {
    icons: IconRegistry,
}

impl MountedApp {
    pub fn routes(&self) -> &'static [ViewRoute] {
        &ROUTES
    }

    pub fn resolve(&self, path: &str) -> Option<View> {
        routes::resolve(path)
    }

    pub fn icons(&self) -> &IconRegistry {
        &self.icons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_registers_all_icons() {
        let app = AppShell::bootstrap().unwrap().mount();
        assert_eq!(app.icons().len(), Icon::ALL.len());
        for icon in Icon::ALL {
            assert!(app.icons().contains(icon.name()));
        }
    }

    #[test]
    fn test_bootstrap_then_duplicate_fails() {
        let mut shell = AppShell::bootstrap().unwrap();
        assert!(shell.register_icon(Icon::Menu).is_err());
    }

    #[test]
    fn test_mounted_app_resolves_routes() {
        let app = AppShell::new().mount();
        assert_eq!(app.routes().len(), 4);
        assert_eq!(app.resolve("/analytics"), Some(View::Analytics));
        assert_eq!(app.resolve("/reports"), None);
    }
}
