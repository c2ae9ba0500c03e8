//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays a cassette, keeping one queue per port/method pair so that
/// calls on different ports do not have to interleave as recorded.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Creates a replayer over the cassette's interactions.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Number of interactions not yet served, across all ports.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Pops the next interaction recorded for `port`/`method`.
    ///
    /// # Panics
    ///
    /// Panics when the cassette holds no further interaction for the pair;
    /// the message lists the pairs that still have interactions left.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        if let Some(interaction) = self.queues.get_mut(&key).and_then(VecDeque::pop_front) {
            return interaction;
        }

        let mut left: Vec<String> = self
            .queues
            .iter()
            .filter(|(_, q)| !q.is_empty())
            .map(|((p, m), q)| format!("{p}::{m} ({})", q.len()))
            .collect();
        left.sort();
        panic!(
            "Cassette exhausted: no interaction left for port={port:?} method={method:?}. \
             Remaining: [{}]",
            left.join(", ")
        );
    }
}
