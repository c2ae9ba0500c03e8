//! Prompt construction for release note generation.

use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDate;

use crate::ports::Ticket;
use crate::snapshot::CodebaseSnapshot;

/// Everything the model is told about the release.
pub struct PromptInput<'a> {
    /// Unified diff of the last commit.
    pub diff: &'a str,
    /// Related tickets, referenced ones first.
    pub tickets: &'a [Ticket],
    /// Codebase snapshot, when it should be included.
    pub snapshot: Option<&'a CodebaseSnapshot>,
    /// Full commit id.
    pub commit: &'a str,
    /// Date the notes are issued.
    pub release_date: NaiveDate,
}

const INSTRUCTIONS: &str = "\
You are an expert release note generator. Create clear, concise, and informative \
release notes from a code diff and its associated Jira tickets.

**Instructions:**
- Analyze the CODE_DIFF and JIRA_TICKETS carefully.
- Infer new features, bug fixes, and general improvements.
- List resolved Jira tickets by their key and summary.
- Focus on user-facing changes where possible and avoid overly technical jargon.
- Use the CODEBASE_SNAPSHOT, when present, only to understand what changed code does.
- Generate the notes in Markdown.
- If no significant features or bug fixes are apparent, describe the general or maintenance changes.
";

/// Renders the generation prompt.
#[must_use]
pub fn build_prompt(input: &PromptInput<'_>) -> String {
    let tickets =
        serde_json::to_string_pretty(input.tickets).unwrap_or_else(|_| String::from("[]"));
    let date = input.release_date.format("%Y-%m-%d");

    let mut prompt = String::from(INSTRUCTIONS);
    prompt.push_str("\n---\n**CODE_DIFF:**\n");
    push_fenced(&mut prompt, "diff", input.diff);
    let _ = write!(prompt, "\n---\n**JIRA_TICKETS:**\n```json\n{tickets}\n```\n");

    if let Some(snapshot) = input.snapshot {
        push_snapshot(&mut prompt, snapshot);
    }

    let _ = write!(
        prompt,
        "\n---\n**Release Notes for Commit: `{commit}`**\n\n\
         Generate the release notes with exactly this structure:\n\n\
         ### {date} Update\n\n\
         #### New Features\n\
         - [New features, referencing Jira issues where applicable (e.g. `New Dashboard Widget (JIRA-123)`)]\n\n\
         #### Bug Fixes\n\
         - [Bug fixes, referencing Jira issues (e.g. `Fixed login issue (JIRA-456)`)]\n\n\
         #### Resolved Issues\n\
         - [JIRA-XXX: Summary of issue]\n\n\
         #### Improvements & General Changes\n\
         - [Other significant changes or performance improvements]\n",
        commit = input.commit,
    );
    prompt
}

fn push_snapshot(prompt: &mut String, snapshot: &CodebaseSnapshot) {
    let _ = write!(prompt, "\n---\n**CODEBASE_SNAPSHOT:** {} file(s)", snapshot.len());
    if let Some(path) = snapshot.truncated_path() {
        let _ = write!(prompt, ", cut short at `{path}`");
    }
    prompt.push('\n');

    for file in snapshot.files() {
        let lang = Path::new(&file.path).extension().and_then(|e| e.to_str()).unwrap_or("");
        let _ = write!(prompt, "\nFile: `{}`\n", file.path);
        push_fenced(prompt, lang, &file.content);
    }
}

/// Appends `body` as a fenced code block whose fence outlasts any backtick
/// run inside it.
fn push_fenced(prompt: &mut String, lang: &str, body: &str) {
    let fence = "`".repeat(longest_backtick_run(body).max(2) + 1);
    let _ = write!(prompt, "{fence}{lang}\n{body}");
    if !body.ends_with('\n') {
        prompt.push('\n');
    }
    prompt.push_str(&fence);
    prompt.push('\n');
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}
