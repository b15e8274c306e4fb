use serde::Serialize;
use single_state_core::prelude::*;

#[derive(Clone, Debug, Serialize)]
struct Form {
    note: String,
    value: i32,
    tags: Vec<String>,
}

#[derive(Default)]
struct FormPatch {
    note: Option<String>,
    value: Option<i32>,
    tags: Option<Vec<String>>,
}

impl Record for Form {
    type Partial = FormPatch;

    fn merge(&self, p: FormPatch) -> Self {
        Form {
            note: p.note.unwrap_or_else(|| self.note.clone()),
            value: p.value.unwrap_or(self.value),
            tags: p.tags.unwrap_or_else(|| self.tags.clone()),
        }
    }
}

/// One composition pass of a form with a counter. Returns the rendered text.
fn form_view(step: usize) -> anyhow::Result<String> {
    let (form, update, reset, _replace) = use_single_state(
        Form {
            note: String::new(),
            value: 0,
            tags: Vec::new(),
        },
        Some("form"),
        true,
    );

    match step {
        1 => update(FormPatch {
            note: Some("hi".into()),
            ..Default::default()
        })?,
        2 => update(FormPatch {
            value: Some(form.value + 1),
            tags: Some(vec!["draft".into()]),
            ..Default::default()
        })?,
        3 => reset()?,
        _ => {}
    }

    Ok(format!("note={:?} value={} tags={:?}", form.note, form.value, form.tags))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,single_state::diff=debug"),
    )
    .init();

    for step in 0..5 {
        let _pass = ComposeGuard::begin();
        log::info!("pass {step}: {}", form_view(step)?);
    }

    // Outside composition, with colored terminal output and a plain map record.
    let settings = SingleState::new(serde_json::json!({"theme": "dark", "volume": 3}))
        .with_label("settings")
        .with_reporter(DiffLogger::new().with_console(LogConsole::new().with_ansi(true)));
    settings.update(serde_json::json!({"volume": 4}))?;
    settings.replace(serde_json::json!({"theme": "light"}))?;

    Ok(())
}
