//! View Handlers
//!
//! 渲染最小 HTML 外壳：标明当前视图、全部导航路由和已注册的图标。
//! 组件渲染由前端完成，这里不涉及。

use axum::{http::Uri, response::Html};

use crate::domain::navigation::{MountedApp, View};
use crate::infrastructure::http::error::ServerError;
use crate::infrastructure::http::state::AppState;

/// 渲染指定视图
pub fn render_view(state: &AppState, view: View) -> Html<String> {
    Html(render_shell(&state.app, view))
}

/// 未匹配任何路由
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}

fn render_shell(app: &MountedApp, view: View) -> String {
    let nav: String = app
        .routes()
        .iter()
        .map(|route| {
            let current = if route.view == view {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(r#"<a href="{}"{}>{}</a>"#, route.path, current, route.name)
        })
        .collect();
    let icons = app.icons().names().collect::<Vec<_>>().join(",");

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head><meta charset=\"utf-8\"><title>{view} - subtrack</title></head>\n",
            "<body>\n",
            "<nav>{nav}</nav>\n",
            "<div id=\"app\" data-view=\"{view}\" data-icons=\"{icons}\"></div>\n",
            "</body>\n",
            "</html>\n"
        ),
        view = view.component_name(),
        nav = nav,
        icons = icons,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigation::AppShell;

    #[test]
    fn test_shell_marks_current_view() {
        let app = AppShell::bootstrap().unwrap().mount();
        let html = render_shell(&app, View::Calendar);

        assert!(html.contains(r#"data-view="Calendar""#));
        assert!(html.contains(r#"<a href="/calendar" aria-current="page">Calendar</a>"#));
        assert!(html.contains(r#"<a href="/settings">Settings</a>"#));
        assert!(html.contains("List,Calendar,Setting"));
    }
}
