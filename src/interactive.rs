//! Menu-driven interactive mode.
//!
//! Reads whitespace-separated tokens from any [`BufRead`] and writes prompts
//! and answers to any [`Write`], so the loop runs the same on a terminal and
//! against in-memory buffers. End of input ends the session.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use color_eyre::eyre::{Result, WrapErr};
use log::debug;

use crate::analysis::report::{describe_path, format_links};
use crate::analysis::Analyzer;
use crate::topology::{Medium, Topology};

const MENU: [&str; 5] = [
    "Enter 0 to exit.",
    "Enter 1 to find the lowest latency path between two vertices.",
    "Enter 2 to find out whether or not the network is copper-only connected.",
    "Enter 3 to find the lowest average latency spanning tree.",
    "Enter 4 to find out if the network remains connected if any two vertices fail.",
];

struct Session<'a, R, W> {
    analyzer: Analyzer<'a>,
    input: R,
    output: W,
    tokens: VecDeque<String>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Next whitespace-separated token, or `None` at end of input
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .wrap_err("Failed to read interactive input")?;
            if read == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.tokens.pop_front())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).wrap_err("Failed to write interactive output")
    }

    /// Read one vertex number; `Ok(None)` at end of input
    fn read_vertex(&mut self) -> Result<Option<Result<usize, String>>> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        let vertex_count = self.analyzer.topology().vertex_count();
        let parsed = match token.parse::<usize>() {
            Ok(v) if v < vertex_count => Ok(v),
            _ => Err(token),
        };
        Ok(Some(parsed))
    }

    /// Returns false when the session should end
    fn lowest_latency_path(&mut self) -> Result<bool> {
        self.say("\nYou have chosen to find the lowest latency path between two vertices.\n")?;
        let last = self.analyzer.topology().vertex_count().saturating_sub(1);
        self.say(&format!(
            "Please enter two vertex numbers between 0 and {} inclusive: ",
            last
        ))?;

        let Some(first) = self.read_vertex()? else {
            return Ok(false);
        };
        let Some(second) = self.read_vertex()? else {
            return Ok(false);
        };
        let (source, target) = match (first, second) {
            (Ok(s), Ok(t)) => (s, t),
            (Err(bad), _) | (_, Err(bad)) => {
                self.say(&format!(
                    "\n'{}' is not a vertex number between 0 and {} inclusive.\n",
                    bad, last
                ))?;
                return Ok(true);
            }
        };

        let path = self.analyzer.shortest_path(source, target)?;
        self.say("")?;
        for line in describe_path(&path) {
            self.say(&line)?;
        }
        self.say("")?;
        Ok(true)
    }

    fn copper_connectivity(&mut self) -> Result<()> {
        self.say("\nYou have chosen to find out whether or not the network is completely copper-connected.\n")?;
        if self.analyzer.is_medium_connected(Medium::Copper) {
            self.say("The network is completely copper-connected.\n")
        } else {
            self.say("The network is not completely copper-connected.\n")
        }
    }

    fn spanning_tree(&mut self) -> Result<()> {
        self.say("\nYou have chosen to find the lowest average latency spanning tree.\n")?;
        let forest = self.analyzer.spanning_forest()?;
        self.say(&format!("Weight of the tree: {}E-7 seconds", forest.total_weight))?;
        self.say(&format!(" Edges in the tree: {}", format_links(&forest.edges)))?;
        if forest.tree_count > 1 {
            self.say(&format!(
                " The network is disconnected; the forest holds {} trees.",
                forest.tree_count
            ))?;
        }
        self.say("")
    }

    fn double_failure(&mut self) -> Result<()> {
        self.say("\nYou have chosen to find out if the network remains connected if any two vertices fail.\n")?;
        let report = self.analyzer.robustness();
        if report.robust {
            self.say("The system would remain connected.\n")
        } else {
            self.say("The system would not remain connected.\n")?;
            if let Some(pair) = report.failing_pair {
                self.say(&format!(
                    "Losing vertices {} and {} splits the network.\n",
                    pair.excluded, pair.critical
                ))?;
            }
            Ok(())
        }
    }

    fn run(&mut self) -> Result<()> {
        loop {
            for line in MENU {
                self.say(line)?;
            }
            self.output.flush().wrap_err("Failed to flush interactive output")?;

            let Some(token) = self.next_token()? else {
                debug!("Interactive input closed");
                return Ok(());
            };
            // only the first character of the answer counts; the rest of the line is dropped
            self.tokens.clear();

            match token.chars().next() {
                Some('0') => {
                    self.say("\nYou have chosen to exit.\n")?;
                    return Ok(());
                }
                Some('1') => {
                    if !self.lowest_latency_path()? {
                        return Ok(());
                    }
                }
                Some('2') => self.copper_connectivity()?,
                Some('3') => self.spanning_tree()?,
                Some('4') => self.double_failure()?,
                _ => self.say(
                    "\nYou have entered an invalid input. Please enter a number from 1-4 inclusive, to perform an action, or 0 to exit.\n",
                )?,
            }
        }
    }
}

/// Run the interactive menu loop over `topology` until the user exits or
/// input ends
pub fn run_interactive<R: BufRead, W: Write>(topology: &Topology, input: R, output: W) -> Result<()> {
    let mut session = Session {
        analyzer: Analyzer::new(topology),
        input,
        output,
        tokens: VecDeque::new(),
    };
    session.run()
}
