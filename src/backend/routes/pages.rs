/**
 * Page Handlers
 *
 * Minimal server-rendered pages. The interesting work happens in the gate:
 * by the time `entry_page` runs, the middleware has already resolved the
 * member from the session cookie and attached it to the request.
 */

use axum::response::Html;

use crate::backend::middleware::session_gate::CurrentUser;

/// GET / - entry page with the member greeting
pub async fn entry_page(CurrentUser(user): CurrentUser) -> Html<String> {
    let prompt = if user.has_default_name() {
        "<p class=\"hint\">이름을 설정해주세요 ✏</p>"
    } else {
        ""
    };
    Html(format!(
        "<!doctype html>\n<html lang=\"ko\"><head><meta charset=\"utf-8\">\
         <title>코드 김밥</title></head>\n<body>\n\
         <h1>안녕하세요, {}님!</h1>\n{}\n</body></html>",
        user.name, prompt
    ))
}

/// GET /login - login page, allow-listed so it renders without a session
pub async fn login_page() -> Html<&'static str> {
    Html(
        "<!doctype html>\n<html lang=\"ko\"><head><meta charset=\"utf-8\">\
         <title>코드 김밥 - 로그인</title></head>\n<body>\n\
         <h1>🍙 코드 김밥</h1>\n<p>블로그 스터디 기록장</p>\n\
         <p>데스크톱 앱에서 로그인해주세요.</p>\n</body></html>",
    )
}
