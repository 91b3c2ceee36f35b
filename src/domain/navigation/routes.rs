//! Navigation Context - 视图路由表
//!
//! 纯静态分发表：路径精确匹配到具名视图，无守卫、无重定向。

use serde::Serialize;

/// 可导航的视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    SubscriptionList,
    Calendar,
    Analytics,
    Settings,
}

impl View {
    /// 视图组件名称
    pub fn component_name(&self) -> &'static str {
        match self {
            Self::SubscriptionList => "SubscriptionList",
            Self::Calendar => "Calendar",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.component_name())
    }
}

/// 路由表中的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewRoute {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// 应用的全部路由
pub static ROUTES: [ViewRoute; 4] = [
    ViewRoute {
        path: "/",
        name: "SubscriptionList",
        view: View::SubscriptionList,
    },
    ViewRoute {
        path: "/calendar",
        name: "Calendar",
        view: View::Calendar,
    },
    ViewRoute {
        path: "/analytics",
        name: "Analytics",
        view: View::Analytics,
    },
    ViewRoute {
        path: "/settings",
        name: "Settings",
        view: View::Settings,
    },
];

/// 按路径解析视图（精确匹配）
pub fn resolve(path: &str) -> Option<View> {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.view)
}

/// 按路由名称查找
pub fn find_by_name(name: &str) -> Option<&'static ViewRoute> {
    ROUTES.iter().find(|route| route.name == name)
}
