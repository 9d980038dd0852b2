//! Conflict resolution
//!
//! The merge algorithm is decoupled from how conflicts are decided: it
//! hands both candidate snapshots to a [`ConflictResolver`] and receives
//! exactly one chosen content string back. The CLI supplies an interactive
//! resolver; tests script their choices up front.

use crate::artifacts::objects::commit::FileSnapshot;
use colored::Colorize;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Stdin, Write};
use std::path::Path;

/// Decides a single file-level merge conflict
///
/// Synchronous and blocking: the merge waits on each call, with no timeout
/// and no automatic fallback.
pub trait ConflictResolver {
    /// Return the content the merged file should hold: the local content
    /// verbatim, the remote content verbatim, or freshly supplied text
    fn resolve(
        &mut self,
        path: &Path,
        local: &FileSnapshot,
        remote: &FileSnapshot,
    ) -> anyhow::Result<String>;
}

/// A scripted choice for one conflict
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Keep the current branch's content
    Local,
    /// Accept the incoming branch's content
    Remote,
    /// Replace both sides with the given content
    Manual(String),
}

/// Resolver that replays a fixed list of choices, for deterministic tests
#[derive(Debug, Default)]
pub struct ScriptedResolver {
    choices: VecDeque<Resolution>,
    invocations: usize,
}

impl ScriptedResolver {
    pub fn new(choices: impl IntoIterator<Item = Resolution>) -> Self {
        ScriptedResolver {
            choices: choices.into_iter().collect(),
            invocations: 0,
        }
    }

    /// How many conflicts were routed through this resolver
    pub fn invocations(&self) -> usize {
        self.invocations
    }
}

impl ConflictResolver for ScriptedResolver {
    fn resolve(
        &mut self,
        path: &Path,
        local: &FileSnapshot,
        remote: &FileSnapshot,
    ) -> anyhow::Result<String> {
        self.invocations += 1;

        match self.choices.pop_front() {
            None => anyhow::bail!("no scripted resolution left for {}", path.display()),
            Some(Resolution::Local) => Ok(local.content.clone()),
            Some(Resolution::Remote) => Ok(remote.content.clone()),
            Some(Resolution::Manual(content)) => Ok(content),
        }
    }
}

/// Interactive resolver presenting both sides and looping on l/r/m choices
///
/// Prompts go to stderr so they interleave with, but do not pollute, the
/// repository's report stream.
pub struct InteractiveResolver<R> {
    input: R,
}

impl InteractiveResolver<BufReader<Stdin>> {
    pub fn from_stdin() -> Self {
        InteractiveResolver {
            input: BufReader::new(std::io::stdin()),
        }
    }
}

impl<R: BufRead> InteractiveResolver<R> {
    pub fn new(input: R) -> Self {
        InteractiveResolver { input }
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("conflict resolution aborted (end of input)");
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead> ConflictResolver for InteractiveResolver<R> {
    fn resolve(
        &mut self,
        path: &Path,
        local: &FileSnapshot,
        remote: &FileSnapshot,
    ) -> anyhow::Result<String> {
        eprintln!();
        eprintln!("--- resolving '{}' ---", path.display());
        eprintln!("{}", "LOCAL (current branch):".blue());
        eprintln!("{}", local.content);
        eprintln!("{}", "REMOTE (incoming branch):".yellow());
        eprintln!("{}", remote.content);
        eprintln!("-----------------------------------");

        loop {
            eprint!("choose (l)ocal, (r)emote or (m)anual [l/r/m]: ");
            std::io::stderr().flush()?;

            match self.read_line()?.to_ascii_lowercase().as_str() {
                "l" => {
                    eprintln!("keeping the local version");
                    return Ok(local.content.clone());
                }
                "r" => {
                    eprintln!("accepting the remote version");
                    return Ok(remote.content.clone());
                }
                "m" => {
                    eprint!("new content (single line): ");
                    std::io::stderr().flush()?;
                    let content = self.read_line()?;
                    return Ok(format!("{content}\n"));
                }
                other => eprintln!("invalid choice '{other}', try again"),
            }
        }
    }
}
