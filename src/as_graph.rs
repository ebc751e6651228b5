use std::collections::{HashMap, HashSet, VecDeque};

use log::error;

use crate::announcement::Prefix;
use crate::policy::{BgpPolicy, Policy, RovPolicy};
use crate::shared::Relationship;

pub type ASN = u32;

/// An AS node: its neighbor adjacencies and its owned policy instance.
/// Neighbor sets are `HashSet`s so a duplicate loader line cannot create a
/// duplicate neighbor.
pub struct AsNode {
    pub asn: ASN,
    pub customers: HashSet<ASN>,
    pub providers: HashSet<ASN>,
    pub peers: HashSet<ASN>,
    /// -1 before `compute_ranks` assigns it.
    pub rank: i64,
    pub policy: Box<dyn Policy>,
}

impl AsNode {
    pub fn new(asn: ASN) -> Self {
        AsNode {
            asn,
            customers: HashSet::new(),
            providers: HashSet::new(),
            peers: HashSet::new(),
            rank: -1,
            policy: Box::new(BgpPolicy::new(asn)),
        }
    }
}

/// Topology store, rank computation, cycle check, and propagation driver.
pub struct AsGraph {
    pub nodes: HashMap<ASN, AsNode>,
    /// `ranks[i]` lists every AS with `rank == i`.
    pub ranks: Vec<Vec<ASN>>,
}

impl AsGraph {
    pub fn new() -> Self {
        AsGraph {
            nodes: HashMap::new(),
            ranks: Vec::new(),
        }
    }

    /// Returns the existing node or creates one with a fresh default BGP
    /// policy bound to it.
    pub fn get_or_create(&mut self, asn: ASN) -> &mut AsNode {
        self.nodes.entry(asn).or_insert_with(|| AsNode::new(asn))
    }

    /// Adds a provider/customer edge: `provider` is a provider of
    /// `customer`. Idempotent.
    pub fn add_provider_customer_edge(&mut self, provider: ASN, customer: ASN) {
        self.get_or_create(provider);
        self.get_or_create(customer);
        self.nodes.get_mut(&provider).unwrap().customers.insert(customer);
        self.nodes.get_mut(&customer).unwrap().providers.insert(provider);
    }

    /// Adds a symmetric peer/peer edge. Idempotent.
    pub fn add_peer_edge(&mut self, a: ASN, b: ASN) {
        self.get_or_create(a);
        self.get_or_create(b);
        self.nodes.get_mut(&a).unwrap().peers.insert(b);
        self.nodes.get_mut(&b).unwrap().peers.insert(a);
    }

    /// Replaces an AS's policy with a fresh `RovPolicy`, creating the node
    /// if absent.
    pub fn enforce_rov(&mut self, asn: ASN) {
        let node = self.get_or_create(asn);
        node.policy = Box::new(RovPolicy::new(asn));
    }

    /// Depth-first traversal over provider edges using three colored
    /// states (unvisited / on-stack / done). A back-edge to an on-stack
    /// node indicates a cycle. Logs a diagnostic and returns `true` on
    /// detection; `false` otherwise. Traversal order over nodes need not
    /// be deterministic but must cover every node.
    pub fn detect_cycles(&self) -> bool {
        let mut color: HashMap<ASN, Color> =
            self.nodes.keys().map(|&asn| (asn, Color::Unvisited)).collect();

        for &start in self.nodes.keys() {
            if color[&start] == Color::Done {
                continue;
            }
            if self.has_cycle_from(start, &mut color) {
                error!(
                    "cycle detected in provider relationship graph reachable from AS {}",
                    start
                );
                return true;
            }
        }
        false
    }

    fn has_cycle_from(&self, asn: ASN, color: &mut HashMap<ASN, Color>) -> bool {
        match color.get(&asn) {
            Some(Color::Done) => return false,
            Some(Color::OnStack) => return true,
            _ => {}
        }
        color.insert(asn, Color::OnStack);
        for &provider in &self.nodes[&asn].providers {
            if self.has_cycle_from(provider, color) {
                return true;
            }
        }
        color.insert(asn, Color::Done);
        false
    }

    /// Kahn-style layering over the customer->provider DAG, rooted at
    /// leaves (ASes with no customers). `rank(p)` is the length of the
    /// longest customer-chain from a leaf to `p`. Requires an acyclic
    /// provider graph as a precondition -- a cycle makes this loop forever,
    /// so callers MUST run `detect_cycles` first and treat a detected
    /// cycle as fatal.
    pub fn compute_ranks(&mut self) {
        let mut remaining: HashMap<ASN, usize> = self
            .nodes
            .values()
            .map(|node| (node.asn, node.customers.len()))
            .collect();

        let mut queue: VecDeque<ASN> = VecDeque::new();
        for (&asn, &count) in &remaining {
            if count == 0 {
                queue.push_back(asn);
            }
        }
        for &asn in &queue {
            self.nodes.get_mut(&asn).unwrap().rank = 0;
        }

        while let Some(cur) = queue.pop_front() {
            let cur_rank = self.nodes[&cur].rank;
            let providers: Vec<ASN> = self.nodes[&cur].providers.iter().copied().collect();
            for p in providers {
                let r = remaining.get_mut(&p).unwrap();
                *r -= 1;
                if *r == 0 {
                    self.nodes.get_mut(&p).unwrap().rank = cur_rank + 1;
                    queue.push_back(p);
                }
            }
        }

        let max_rank = self.nodes.values().map(|n| n.rank).max().unwrap_or(-1);
        let mut ranks: Vec<Vec<ASN>> = vec![Vec::new(); (max_rank + 1).max(0) as usize];
        for node in self.nodes.values() {
            if node.rank >= 0 {
                ranks[node.rank as usize].push(node.asn);
            }
        }
        self.ranks = ranks;
    }

    /// For each rank level in ascending order, every AS in the level
    /// exports to its providers; then every AS runs `process_received`.
    pub fn propagate_up(&mut self) {
        let mut deliveries: Vec<(ASN, Prefix, crate::announcement::Announcement)> = Vec::new();
        for level in 0..self.ranks.len() {
            for &asn in &self.ranks[level] {
                let node = &self.nodes[&asn];
                let exports = node.policy.export(Relationship::Provider);
                for &provider in &node.providers {
                    for (prefix, ann) in &exports {
                        deliveries.push((provider, prefix.clone(), ann.clone()));
                    }
                }
            }
        }
        for (target, prefix, ann) in deliveries {
            if let Some(node) = self.nodes.get_mut(&target) {
                node.policy.receive(prefix, ann, Relationship::Customer);
            }
        }
        self.process_all_received();
    }

    /// Every AS exports to its peers (rank order is immaterial); then
    /// `process_received` on every AS.
    pub fn propagate_across(&mut self) {
        let asns: Vec<ASN> = self.nodes.keys().copied().collect();
        let mut deliveries: Vec<(ASN, Prefix, crate::announcement::Announcement)> = Vec::new();
        for &asn in &asns {
            let node = &self.nodes[&asn];
            let exports = node.policy.export(Relationship::Peer);
            for &peer in &node.peers {
                for (prefix, ann) in &exports {
                    deliveries.push((peer, prefix.clone(), ann.clone()));
                }
            }
        }
        for (target, prefix, ann) in deliveries {
            if let Some(node) = self.nodes.get_mut(&target) {
                node.policy.receive(prefix, ann, Relationship::Peer);
            }
        }
        self.process_all_received();
    }

    /// Iterate ranks in descending order, every AS exports to its
    /// customers; then `process_received` on every AS.
    pub fn propagate_down(&mut self) {
        let mut deliveries: Vec<(ASN, Prefix, crate::announcement::Announcement)> = Vec::new();
        for level in (0..self.ranks.len()).rev() {
            for &asn in &self.ranks[level] {
                let node = &self.nodes[&asn];
                let exports = node.policy.export(Relationship::Customer);
                for &customer in &node.customers {
                    for (prefix, ann) in &exports {
                        deliveries.push((customer, prefix.clone(), ann.clone()));
                    }
                }
            }
        }
        for (target, prefix, ann) in deliveries {
            if let Some(node) = self.nodes.get_mut(&target) {
                node.policy.receive(prefix, ann, Relationship::Provider);
            }
        }
        self.process_all_received();
    }

    /// Runs `process_received` on every AS. Idempotent on an empty queue.
    pub fn process_all_received(&mut self) {
        for node in self.nodes.values_mut() {
            node.policy.process_received();
        }
    }

    /// Executes `2 * ranks.len()` rounds of up/across/down. A loose upper
    /// bound chosen so that under monotone best-path selection with no
    /// withdrawals, the RIB reaches a fixed point.
    pub fn run_to_convergence(&mut self) {
        let rounds = 2 * self.ranks.len();
        for _ in 0..rounds {
            self.propagate_up();
            self.propagate_across();
            self.propagate_down();
        }
    }

    /// Gathers `dump_rib_rows` from every AS.
    pub fn collect_rib_rows(&self) -> Vec<(ASN, Prefix, String)> {
        let mut rows = Vec::new();
        for node in self.nodes.values() {
            node.policy.dump_rib_rows(&mut rows);
        }
        rows
    }
}

impl Default for AsGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    OnStack,
    Done,
}
