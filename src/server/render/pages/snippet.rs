//! Home, snippet detail and create snippet pages.

use maud::{html, Markup};

use crate::server::{
    error::render::RenderError,
    render::{
        human_date,
        layout::{base, csrf_field, field_error},
        pages::unexpected,
        Page, TemplateData, CREATE_PAGE, HOME_PAGE, SHOW_PAGE,
    },
};

/// Expiry choices offered on the create form, in days.
const EXPIRY_OPTIONS: [(&str, &str); 3] = [("365", "One Year"), ("7", "One Week"), ("1", "One Day")];
const DEFAULT_EXPIRY: &str = "365";

/// Table of the latest snippets.
pub fn home(data: &TemplateData) -> Result<Markup, RenderError> {
    let Page::Snippets(snippets) = &data.page else {
        return Err(unexpected(HOME_PAGE, "snippets", &data.page));
    };

    let main = html! {
        h2 { "Latest Snippets" }
        @if snippets.is_empty() {
            p { "There's nothing to see here... yet!" }
        } @else {
            table {
                tr {
                    th { "Title" }
                    th { "Created" }
                    th { "ID" }
                }
                @for snippet in snippets {
                    tr {
                        td { a href={ "/snippet/" (snippet.id) } { (snippet.title) } }
                        td { (human_date(&snippet.created_at)) }
                        td { "#" (snippet.id) }
                    }
                }
            }
        }
    };

    Ok(base("Home", data, main))
}

/// Detail view of one snippet.
pub fn show(data: &TemplateData) -> Result<Markup, RenderError> {
    let Page::Snippet(snippet) = &data.page else {
        return Err(unexpected(SHOW_PAGE, "snippet", &data.page));
    };

    let main = html! {
        div class="snippet" {
            div class="metadata" {
                strong { (snippet.title) }
                span { "#" (snippet.id) }
            }
            pre { code { (snippet.content) } }
            div class="metadata" {
                time { "Created: " (human_date(&snippet.created_at)) }
                time { "Expires: " (human_date(&snippet.expires_at)) }
            }
        }
    };

    Ok(base(&format!("Snippet #{}", snippet.id), data, main))
}

/// Form for posting a new snippet, redisplaying submitted values and errors.
pub fn create(data: &TemplateData) -> Result<Markup, RenderError> {
    let Page::Form(form) = &data.page else {
        return Err(unexpected(CREATE_PAGE, "form", &data.page));
    };

    let expires = match form.get("expires") {
        "" => DEFAULT_EXPIRY,
        value => value,
    };

    let main = html! {
        form action="/snippet/create" method="POST" {
            (csrf_field(data))
            div {
                label { "Title:" }
                (field_error(form, "title"))
                input type="text" name="title" value=(form.get("title"));
            }
            div {
                label { "Content:" }
                (field_error(form, "content"))
                textarea name="content" { (form.get("content")) }
            }
            div {
                label { "Delete in:" }
                (field_error(form, "expires"))
                @for (value, label) in EXPIRY_OPTIONS {
                    input type="radio" name="expires" value=(value) checked[value == expires];
                    " " (label)
                }
            }
            div {
                input type="submit" value="Publish snippet";
            }
        }
    };

    Ok(base("Create a New Snippet", data, main))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use crate::{
        model::{snippet::SnippetDto, user::UserDto},
        server::{
            form::Form,
            render::{pages::snippet, Page, TemplateData},
        },
    };

    fn snippet_dto() -> SnippetDto {
        let created_at = NaiveDate::from_ymd_opt(2025, 10, 17)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();

        SnippetDto {
            id: 3,
            title: "An old silent pond".to_string(),
            content: "<script>alert('frog')</script>".to_string(),
            created_at,
            expires_at: created_at + Duration::days(7),
        }
    }

    fn data(page: Page) -> TemplateData {
        TemplateData {
            csrf_token: "token-value".to_string(),
            current_year: 2025,
            page,
            ..Default::default()
        }
    }

    /// Expect the empty state message when there are no snippets
    #[test]
    fn home_without_snippets() {
        let html = snippet::home(&data(Page::Snippets(Vec::new())))
            .unwrap()
            .into_string();

        assert!(html.contains("nothing to see here"));
        assert!(html.contains("Powered by Rust in 2025"));
    }

    /// Expect each snippet to link to its detail page
    #[test]
    fn home_lists_snippets() {
        let html = snippet::home(&data(Page::Snippets(vec![snippet_dto()])))
            .unwrap()
            .into_string();

        assert!(html.contains(r#"href="/snippet/3""#));
        assert!(html.contains("17 Oct 2025 at 09:30"));
    }

    /// Expect snippet content to be escaped
    #[test]
    fn show_escapes_content() {
        let html = snippet::show(&data(Page::Snippet(snippet_dto())))
            .unwrap()
            .into_string();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Expires: 24 Oct 2025 at 09:30"));
    }

    /// Expect the navigation to depend on the authenticated user
    #[test]
    fn navigation_reflects_authentication() {
        let anonymous = snippet::show(&data(Page::Snippet(snippet_dto())))
            .unwrap()
            .into_string();
        assert!(anonymous.contains(r#"href="/user/login""#));
        assert!(!anonymous.contains("Create snippet"));

        let mut authenticated = data(Page::Snippet(snippet_dto()));
        authenticated.authenticated_user = Some(UserDto {
            id: 1,
            name: "Alice Jones".to_string(),
            email: "alice@example.com".to_string(),
            created_at: snippet_dto().created_at,
        });
        let html = snippet::show(&authenticated).unwrap().into_string();

        assert!(html.contains("Create snippet"));
        assert!(html.contains("Logout (Alice Jones)"));
        assert!(html.contains(r#"name="csrf_token" value="token-value""#));
    }

    /// Expect a fresh create form to default to a one year expiry
    #[test]
    fn create_defaults_expiry() {
        let html = snippet::create(&data(Page::Form(Form::empty())))
            .unwrap()
            .into_string();

        assert!(html.contains(r#"value="365" checked"#));
        assert!(html.contains(r#"name="csrf_token" value="token-value""#));
    }

    /// Expect submitted values and errors to be redisplayed
    #[test]
    fn create_redisplays_submission() {
        let mut form = Form::new([("title", ""), ("content", "Climb Mount Fuji"), ("expires", "7")]);
        form.required(&["title"]);

        let html = snippet::create(&data(Page::Form(form)))
            .unwrap()
            .into_string();

        assert!(html.contains("This field cannot be blank"));
        assert!(html.contains("Climb Mount Fuji"));
        assert!(html.contains(r#"value="7" checked"#));
        assert!(!html.contains(r#"value="365" checked"#));
    }

    /// Expect the flash message to be shown when present
    #[test]
    fn shows_flash() {
        let mut data = data(Page::Snippet(snippet_dto()));
        data.flash = Some("Snippet successfully created!".to_string());

        let html = snippet::show(&data).unwrap().into_string();

        assert!(html.contains(r#"<div class="flash">Snippet successfully created!</div>"#));
    }
}
