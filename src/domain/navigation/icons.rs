//! Navigation Context - 全局图标注册

use serde::Serialize;

use super::errors::NavigationError;

/// 应用使用到的图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Icon {
    List,
    Calendar,
    Setting,
    ArrowLeft,
    ArrowRight,
    Grid,
    Menu,
    Plus,
    MoreFilled,
    CreditCard,
    ChatDotRound,
    User,
    Check,
    Bell,
    Clock,
}

impl Icon {
    /// 启动时注册的完整图标集合
    pub const ALL: [Icon; 15] = [
        Icon::List,
        Icon::Calendar,
        Icon::Setting,
        Icon::ArrowLeft,
        Icon::ArrowRight,
        Icon::Grid,
        Icon::Menu,
        Icon::Plus,
        Icon::MoreFilled,
        Icon::CreditCard,
        Icon::ChatDotRound,
        Icon::User,
        Icon::Check,
        Icon::Bell,
        Icon::Clock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Icon::List => "List",
            Icon::Calendar => "Calendar",
            Icon::Setting => "Setting",
            Icon::ArrowLeft => "ArrowLeft",
            Icon::ArrowRight => "ArrowRight",
            Icon::Grid => "Grid",
            Icon::Menu => "Menu",
            Icon::Plus => "Plus",
            Icon::MoreFilled => "MoreFilled",
            Icon::CreditCard => "CreditCard",
            Icon::ChatDotRound => "ChatDotRound",
            Icon::User => "User",
            Icon::Check => "Check",
            Icon::Bell => "Bell",
            Icon::Clock => "Clock",
        }
    }
}

/// 图标注册表，保持注册顺序
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: Vec<Icon>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, icon: Icon) -> Result<(), NavigationError> {
        if self.icons.contains(&icon) {
            return Err(NavigationError::DuplicateIcon(icon.name()));
        }
        self.icons.push(icon);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.iter().any(|icon| icon.name() == name)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.icons.iter().map(Icon::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = IconRegistry::new();
        registry.register(Icon::Bell).unwrap();
        let err = registry.register(Icon::Bell).unwrap_err();
        assert!(err.to_string().contains("Bell"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_preserves_order() {
        let mut registry = IconRegistry::new();
        registry.register(Icon::Clock).unwrap();
        registry.register(Icon::List).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Clock", "List"]);
        assert!(registry.contains("List"));
        assert!(!registry.contains("Grid"));
    }
}
