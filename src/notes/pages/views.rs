use std::fmt::Write as _;

use time::{OffsetDateTime, macros::format_description};

use crate::notes::{FieldErrors, Note, NoteId, NoteInput, NoteList, TITLE_MAX_CHARS};

const STYLE: &str = r#"
  body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
  .note { background: #fff9b1; border-radius: 4px; padding: 0.75rem 1rem; margin-bottom: 1rem; }
  .note h2 { margin: 0 0 0.5rem; font-size: 1.2rem; }
  .content { white-space: pre-wrap; }
  .meta { color: #666; font-size: 0.85rem; }
  .flash { background: #e6f4ea; border-left: 4px solid #1e8e3e; padding: 0.5rem 1rem; }
  .errorlist { color: #b00020; margin: 0.25rem 0; padding-left: 1rem; }
  label { display: block; font-weight: 600; margin-top: 1rem; }
  input[type=text], textarea { width: 100%; box-sizing: border-box; }
  .actions { margin-top: 1rem; }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Create,
    Update(NoteId),
}

impl FormAction {
    fn label(self) -> &'static str {
        match self {
            FormAction::Create => "Create",
            FormAction::Update(_) => "Update",
        }
    }

    fn target(self) -> String {
        match self {
            FormAction::Create => "/notes/create/".to_string(),
            FormAction::Update(id) => format!("/notes/{id}/edit/"),
        }
    }

    fn cancel(self) -> String {
        match self {
            FormAction::Create => "/notes/".to_string(),
            FormAction::Update(id) => format!("/notes/{id}/"),
        }
    }
}

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))
        .unwrap_or_else(|_| at.to_string())
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title} | Sticky Notes</title>
  <style>{STYLE}</style>
</head>
<body>
  <header><a href="/notes/">Sticky Notes</a></header>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
    )
}

fn flash(message: Option<&str>) -> String {
    match message {
        Some(msg) => format!("<p class=\"flash\">{}</p>\n", escape(msg)),
        None => String::new(),
    }
}

fn meta(note: &Note) -> String {
    format!(
        r#"<p class="meta">Created {} &middot; Updated {}</p>"#,
        timestamp(note.created_at),
        timestamp(note.updated_at)
    )
}

pub fn note_list_page(list: &NoteList, message: Option<&str>) -> String {
    let mut body = flash(message);
    let _ = writeln!(body, "<h1>My Notes</h1>");
    let _ = writeln!(
        body,
        r#"<p>Total notes: <strong id="total-notes">{}</strong> &middot; <a href="/notes/create/">New note</a></p>"#,
        list.total
    );

    if list.notes.is_empty() {
        let _ = writeln!(
            body,
            r#"<p class="empty">No notes yet! <a href="/notes/create/">Create your first note</a>.</p>"#
        );
    }

    for note in &list.notes {
        let _ = writeln!(
            body,
            r#"<article class="note">
  <h2><a href="/notes/{id}/">{title}</a></h2>
  <div class="content">{content}</div>
  {meta}
</article>"#,
            id = note.id,
            title = escape(&note.title),
            content = escape(&note.content),
            meta = meta(note),
        );
    }

    layout("My Notes", &body)
}

pub fn note_detail_page(note: &Note, message: Option<&str>) -> String {
    let body = format!(
        r#"{flash}<article class="note">
  <h1>{title}</h1>
  <div class="content">{content}</div>
  {meta}
</article>
<p class="actions">
  <a href="/notes/{id}/edit/">Edit</a> &middot;
  <a href="/notes/{id}/delete/">Delete</a> &middot;
  <a href="/notes/">Back to all notes</a>
</p>"#,
        id = note.id,
        title = escape(&note.title),
        content = escape(&note.content),
        meta = meta(note),
        flash = flash(message),
    );

    layout(&note.title, &body)
}

fn field_error(message: Option<&str>) -> String {
    match message {
        Some(msg) => format!(r#"<ul class="errorlist"><li>{}</li></ul>"#, escape(msg)),
        None => String::new(),
    }
}

pub fn note_form_page(action: FormAction, input: &NoteInput, errors: &FieldErrors) -> String {
    let heading = format!("{} Note", action.label());
    let body = format!(
        r#"<h1>{heading}</h1>
<form method="post" action="{target}">
  <label for="id_title">Title</label>
  {title_error}
  <input type="text" id="id_title" name="title" maxlength="{max}" placeholder="Enter note title" value="{title}" />
  <small>Maximum {max} characters</small>
  <label for="id_content">Content</label>
  {content_error}
  <textarea id="id_content" name="content" rows="6" placeholder="Enter note content">{content}</textarea>
  <small>Add your note content here</small>
  <p class="actions">
    <button type="submit">{label}</button>
    <a href="{cancel}">Cancel</a>
  </p>
</form>"#,
        target = action.target(),
        cancel = action.cancel(),
        label = action.label(),
        max = TITLE_MAX_CHARS,
        title_error = field_error(errors.title.as_deref()),
        content_error = field_error(errors.content.as_deref()),
        title = escape(input.title.as_deref().unwrap_or_default()),
        content = escape(input.content.as_deref().unwrap_or_default()),
    );

    layout(&heading, &body)
}

pub fn confirm_delete_page(note: &Note) -> String {
    let body = format!(
        r#"<h1>Delete Note</h1>
<p>Are you sure you want to delete "<strong>{title}</strong>"? This cannot be undone.</p>
<form method="post" action="/notes/{id}/delete/">
  <p class="actions">
    <button type="submit">Yes, delete</button>
    <a href="/notes/{id}/">Cancel</a>
  </p>
</form>"#,
        id = note.id,
        title = escape(&note.title),
    );

    layout("Delete Note", &body)
}

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        r#"<h1>Not Found</h1>
<p>The note you are looking for does not exist. <a href="/notes/">Back to all notes</a>.</p>"#,
    )
}

pub fn server_error_page() -> String {
    layout(
        "Server Error",
        "<h1>Server Error</h1>\n<p>Something went wrong. Please try again.</p>",
    )
}
