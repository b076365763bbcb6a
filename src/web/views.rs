//! HTML views rendered with embedded `minijinja` templates.

use crate::task::domain::{Task, TaskStatus};
use minijinja::Environment;
use serde::Serialize;

const INDEX_TEMPLATE: &str = r#"<!doctype html>
<html>
<head><title>Taskboard</title></head>
<body>
<h1>Tasks</h1>
<p>
  <a href="/">all</a> |
  <a href="/?status=pending">pending</a> |
  <a href="/?status=done">done</a> |
  <a href="/new">add a task</a>
</p>
{% if tasks %}
<ul>
{% for task in tasks %}
  <li>
    <strong>{{ task.title }}</strong> [{{ task.status }}]
    {% if task.description %}&mdash; {{ task.description }}{% endif %}
    <small>created {{ task.created_at }}</small>
    <a href="/edit/{{ task.id }}">edit</a>
    <a href="/delete/{{ task.id }}">delete</a>
  </li>
{% endfor %}
</ul>
{% else %}
<p>No tasks{% if filter %} with status {{ filter }}{% endif %}.</p>
{% endif %}
</body>
</html>
"#;

const NEW_TEMPLATE: &str = r#"<!doctype html>
<html>
<head><title>Add task</title></head>
<body>
<h1>Add task</h1>
<form method="post" action="/add">
  <label>Title <input name="title" required></label>
  <label>Description <textarea name="description"></textarea></label>
  <button type="submit">Create</button>
</form>
<p><a href="/">back</a></p>
</body>
</html>
"#;

const EDIT_TEMPLATE: &str = r#"<!doctype html>
<html>
<head><title>Edit task</title></head>
<body>
<h1>Edit task</h1>
<form method="post" action="/update/{{ task.id }}">
  <label>Title <input name="title" value="{{ task.title }}" required></label>
  <label>Description <textarea name="description">{{ task.description }}</textarea></label>
  <label>Status
    <select name="status">
      <option value="pending" {% if task.status == "pending" %}selected{% endif %}>pending</option>
      <option value="done" {% if task.status == "done" %}selected{% endif %}>done</option>
    </select>
  </label>
  <button type="submit">Save</button>
</form>
<p><a href="/">back</a></p>
</body>
</html>
"#;

#[derive(Serialize)]
struct IndexContext<'a> {
    tasks: &'a [Task],
    filter: Option<&'static str>,
}

#[derive(Serialize)]
struct EditContext<'a> {
    task: &'a Task,
}

/// Template environment for the task pages.
#[derive(Debug)]
pub struct TaskViews {
    environment: Environment<'static>,
}

impl TaskViews {
    /// Builds the environment with the embedded page templates.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        environment.add_template("index.html", INDEX_TEMPLATE)?;
        environment.add_template("new.html", NEW_TEMPLATE)?;
        environment.add_template("edit.html", EDIT_TEMPLATE)?;
        Ok(Self { environment })
    }

    /// Renders the task listing, noting any active status filter.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn render_index(
        &self,
        tasks: &[Task],
        filter: Option<TaskStatus>,
    ) -> Result<String, minijinja::Error> {
        self.environment.get_template("index.html")?.render(IndexContext {
            tasks,
            filter: filter.map(TaskStatus::as_str),
        })
    }

    /// Renders the create-task form.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn render_new(&self) -> Result<String, minijinja::Error> {
        self.environment.get_template("new.html")?.render(())
    }

    /// Renders the edit form for an existing task.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn render_edit(&self, task: &Task) -> Result<String, minijinja::Error> {
        self.environment
            .get_template("edit.html")?
            .render(EditContext { task })
    }
}
