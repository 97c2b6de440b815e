use crate::domain::Post;
use crate::richtext;
use chrono::{DateTime, FixedOffset, Locale};
use maud::{html, Markup, PreEscaped, DOCTYPE};

// full HTML document for one post: banner, header with the publication
// metadata, then every content section in document order
pub fn post_page(post: &Post, read_minutes: u32) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (post.title) }
            }
            body {
                div class="banner" {
                    img src=(post.banner_url) alt=(post.title);
                }
                article class="container" {
                    header class="post-header" {
                        h1 { (post.title) }
                        div class="infos" {
                            @if let Some(date) = &post.first_publication_date {
                                time { (format_publication_date(date)) }
                            }
                            span class="author" { (post.author) }
                            span class="timer" { (read_minutes) " min" }
                        }
                    }
                    section class="post" {
                        @for content in &post.content {
                            h3 { (content.heading) }
                            div { (PreEscaped(richtext::as_html(&content.body))) }
                        }
                    }
                }
            }
        }
    }
}

// shown while an unknown slug is being fetched in the background; the meta
// refresh makes the client come back for the resolved page
pub fn loading_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content="1";
                title { "Carregando..." }
            }
            body {
                span { "Carregando..." }
            }
        }
    }
}

// "01 jan 2021" under the pt-BR locale
pub fn format_publication_date(date: &DateTime<FixedOffset>) -> String {
    date.format_localized("%d %b %Y", Locale::pt_BR).to_string()
}
