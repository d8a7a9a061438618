//! Interactive terminal session: describe dreams, browse the journal and feed.

use crate::render;
use anyhow::{anyhow, bail, Context, Result};
use dreamsight_core::{DreamsightConfig, Emotion, EmotionSelection};
use dreamsight_expression::{DreamAnalyzer, ThinkingDelay};
use dreamsight_journal::{submit_dream, DreamArchive, JournalQuery, SortOrder};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};
use uuid::Uuid;

const HELP: &str = "\
Type a dream description to analyze it with the selected emotions.
  :emotion <name>        toggle an emotion (up to 3)
  :share                 toggle sharing to the community feed
  :journal [search]      list journal entries (optionally searching)
  :filter <emotion|all>  only list entries with that emotion
  :sort <newest|oldest>  journal ordering
  :show <n>              show entry n from the last journal listing
  :feed                  list shared dreams
  :like <n>              like/unlike shared dream n
  :comment <n> <text>    comment on shared dream n
  :symbols               list all dream symbols
  :help                  this text
  quit | exit            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Describe(String),
    ToggleEmotion(Emotion),
    ToggleShare,
    Journal(Option<String>),
    Filter(Option<Emotion>),
    Sort(SortOrder),
    Show(usize),
    Feed,
    Like(usize),
    Comment(usize, String),
    Symbols,
    Help,
    Quit,
    Empty,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(SessionCommand::Empty);
        }
        if line == "quit" || line == "exit" {
            return Ok(SessionCommand::Quit);
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(SessionCommand::Describe(line.to_string()));
        };

        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };
        let cmd = match name {
            "emotion" | "e" => SessionCommand::ToggleEmotion(rest.parse()?),
            "share" => SessionCommand::ToggleShare,
            "journal" | "j" => {
                SessionCommand::Journal((!rest.is_empty()).then(|| rest.to_string()))
            }
            "filter" => match rest {
                "" | "all" => SessionCommand::Filter(None),
                label => SessionCommand::Filter(Some(label.parse()?)),
            },
            "sort" => match rest {
                "newest" | "" => SessionCommand::Sort(SortOrder::Newest),
                "oldest" => SessionCommand::Sort(SortOrder::Oldest),
                other => bail!("unknown sort order '{}' (use newest or oldest)", other),
            },
            "show" => SessionCommand::Show(parse_index(rest)?),
            "feed" => SessionCommand::Feed,
            "like" => SessionCommand::Like(parse_index(rest)?),
            "comment" => {
                let (index, text) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| anyhow!("usage: :comment <n> <text>"))?;
                SessionCommand::Comment(parse_index(index)?, text.trim().to_string())
            }
            "symbols" => SessionCommand::Symbols,
            "help" | "h" | "?" => SessionCommand::Help,
            other => bail!("unknown command ':{}' (try :help)", other),
        };
        Ok(cmd)
    }
}

/// 1-based index as typed by the user.
fn parse_index(s: &str) -> Result<usize> {
    let n: usize = s
        .trim()
        .parse()
        .with_context(|| format!("expected an entry number, got '{}'", s))?;
    if n == 0 {
        bail!("entry numbers start at 1");
    }
    Ok(n)
}

pub struct Session {
    analyzer: DreamAnalyzer,
    archive: DreamArchive,
    delay: ThinkingDelay,
    selection: EmotionSelection,
    share: bool,
    query: JournalQuery,
    listing: Vec<Uuid>,
}

impl Session {
    pub fn new(config: &DreamsightConfig, delay: ThinkingDelay) -> Self {
        Self {
            analyzer: DreamAnalyzer::new(config.analysis.clone()),
            archive: DreamArchive::new(config.community.comment_author.clone()),
            delay,
            selection: EmotionSelection::new(),
            share: false,
            query: JournalQuery::default(),
            listing: Vec::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        println!("DreamSight. Select emotions with :emotion <name>, then describe your dream. Type :help for commands.");
        info!("session started");

        loop {
            let line = match rl.readline(&self.prompt()) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };
            if !line.trim().is_empty() {
                let _ = rl.add_history_entry(line.as_str());
            }

            match SessionCommand::parse(&line) {
                Ok(SessionCommand::Quit) => break,
                Ok(cmd) => match self.execute(cmd).await {
                    Ok(output) if !output.is_empty() => println!("{}", output),
                    Ok(_) => {}
                    Err(e) => println!("[error] {:#}", e),
                },
                Err(e) => println!("[error] {:#}", e),
            }
        }

        info!(entries = self.archive.journal.len(), "session ended");
        Ok(())
    }

    fn prompt(&self) -> String {
        format!(
            "[{}{}]> ",
            self.selection,
            if self.share { " | shared" } else { "" }
        )
    }

    pub async fn execute(&mut self, cmd: SessionCommand) -> Result<String> {
        debug!(?cmd, "executing");
        match cmd {
            SessionCommand::Describe(text) => self.describe(&text).await,
            SessionCommand::ToggleEmotion(emotion) => {
                let rejected = self.selection.is_full() && !self.selection.contains(emotion);
                let on = self.selection.toggle(emotion);
                Ok(if on {
                    format!("{} selected. Emotions: {}", emotion, self.selection)
                } else if rejected {
                    format!(
                        "At most 3 emotions can be selected. Emotions: {}",
                        self.selection
                    )
                } else {
                    format!("{} removed. Emotions: {}", emotion, self.selection)
                })
            }
            SessionCommand::ToggleShare => {
                self.share = !self.share;
                Ok(if self.share {
                    "New dreams will be shared with the community.".to_string()
                } else {
                    "New dreams stay private.".to_string()
                })
            }
            SessionCommand::Journal(search) => {
                self.query.search = search.unwrap_or_default();
                Ok(self.list_journal())
            }
            SessionCommand::Filter(emotion) => {
                self.query.emotion = emotion;
                Ok(self.list_journal())
            }
            SessionCommand::Sort(order) => {
                self.query.order = order;
                Ok(self.list_journal())
            }
            SessionCommand::Show(n) => {
                let id = self
                    .listing
                    .get(n - 1)
                    .copied()
                    .ok_or_else(|| anyhow!("no entry {} in the last listing", n))?;
                let entry = self
                    .archive
                    .journal
                    .get(id)
                    .ok_or_else(|| anyhow!("entry {} is gone", n))?;
                Ok(render::entry_detail(entry))
            }
            SessionCommand::Feed => Ok(self.list_feed()),
            SessionCommand::Like(n) => {
                let id = self.feed_id(n)?;
                let liked = self.archive.community.toggle_like(id)?;
                Ok(if liked { "Liked." } else { "Like removed." }.to_string())
            }
            SessionCommand::Comment(n, text) => {
                let id = self.feed_id(n)?;
                Ok(match self.archive.community.add_comment(id, &text)? {
                    Some(comment) => format!("Comment posted as {}.", comment.author),
                    None => "Empty comment ignored.".to_string(),
                })
            }
            SessionCommand::Symbols => Ok(render::symbol_table()),
            SessionCommand::Help => Ok(HELP.to_string()),
            SessionCommand::Quit | SessionCommand::Empty => Ok(String::new()),
        }
    }

    async fn describe(&mut self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            bail!("describe your dream first");
        }
        if self.selection.is_empty() {
            bail!("select at least one emotion first, e.g. :emotion fear");
        }
        let wait = self.delay.delay();
        if !wait.is_zero() {
            println!("Analyzing dream...");
            tokio::time::sleep(wait).await;
        }

        // Emotions and sharing carry over to the next dream
        let entry = submit_dream(
            &mut self.analyzer,
            &mut self.archive,
            text,
            self.selection.clone(),
            self.share,
        )?;
        let mut out = match &entry.analysis {
            Some(analysis) => render::analysis_block(analysis),
            None => String::new(),
        };
        out.push_str(if entry.is_shared {
            "\nSaved to your journal and shared with the community."
        } else {
            "\nSaved to your journal."
        });
        Ok(out)
    }

    fn list_journal(&mut self) -> String {
        if self.archive.journal.is_empty() {
            self.listing.clear();
            return "Your journal is empty. Describe a dream to add the first entry.".to_string();
        }
        let found = self.archive.journal.query(&self.query);
        self.listing = found.iter().map(|e| e.id).collect();
        if found.is_empty() {
            return "No dreams match your search criteria.".to_string();
        }
        found
            .iter()
            .enumerate()
            .map(|(i, e)| render::entry_line(i + 1, e))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn list_feed(&self) -> String {
        let feed = &self.archive.community;
        if feed.is_empty() {
            return "No dreams shared yet. Use :share before describing a dream.".to_string();
        }
        let header = format!("{} shared, {} liked\n", feed.len(), feed.like_count());
        let items = feed
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| {
                render::feed_item(i + 1, e, feed.is_liked(e.id), &feed.comments_for(e.id))
            })
            .collect::<Vec<_>>()
            .join("\n");
        header + &items
    }

    fn feed_id(&self, n: usize) -> Result<Uuid> {
        self.archive
            .community
            .entries()
            .get(n - 1)
            .map(|e| e.id)
            .ok_or_else(|| anyhow!("no shared dream {}", n))
    }
}
