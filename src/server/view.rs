//! HTML rendering for the landing page.
//!
//! One page, two states: anonymous (login link) or logged in (avatar,
//! username, logout link). User-controlled values are escaped before they
//! reach the markup.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::server::model::identity::Identity;

pub fn render_index(identity: Option<&Identity>) -> String {
    let body = match identity {
        Some(identity) => logged_in_body(identity),
        None => anonymous_body(),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Gatehouse</title>\n\
         <link rel=\"stylesheet\" href=\"/styles.css\">\n\
         </head>\n\
         <body>\n\
         <main class=\"card\">\n\
         {body}\n\
         </main>\n\
         </body>\n\
         </html>\n"
    )
}

fn logged_in_body(identity: &Identity) -> String {
    let username = encode_text(&identity.username);
    let avatar_url = encode_double_quoted_attribute(&identity.avatar_url);

    format!(
        "<img class=\"avatar\" src=\"{avatar_url}\" alt=\"Avatar of {username}\">\n\
         <h1>Welcome, {username}</h1>\n\
         <a class=\"button\" href=\"/logout\">Log out</a>"
    )
}

fn anonymous_body() -> String {
    "<h1>Welcome</h1>\n\
     <p>You are not logged in.</p>\n\
     <a class=\"button\" href=\"/auth/discord\">Login with Discord</a>"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_view_has_login_link_and_no_identity() {
        let html = render_index(None);

        assert!(html.contains("/auth/discord"));
        assert!(html.contains("not logged in"));
        assert!(!html.contains("avatar"));
    }

    #[test]
    fn logged_in_view_shows_username_and_avatar() {
        let identity = Identity {
            id: "123".to_string(),
            username: "alice".to_string(),
            avatar_url: "https://cdn.discordapp.com/avatars/123/abc.png".to_string(),
        };

        let html = render_index(Some(&identity));

        assert!(html.contains("Welcome, alice"));
        assert!(html.contains("https://cdn.discordapp.com/avatars/123/abc.png"));
        assert!(html.contains("/logout"));
    }

    /// Usernames are attacker-controlled; markup in them must not survive
    /// rendering.
    #[test]
    fn username_is_html_escaped() {
        let identity = Identity {
            id: "123".to_string(),
            username: "<script>alert(1)</script>".to_string(),
            avatar_url: "https://cdn.discordapp.com/embed/avatars/0.png".to_string(),
        };

        let html = render_index(Some(&identity));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
