use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};

use common::create_rng_from_seed;
use engine::{CanonicalBoard, GameEngine, ValidActions};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::borrowed_or_owned::BorrowedOrOwned;
use crate::{
    key_of, EdgeMetrics, MCTSError, MCTSOptions, NodeId, NodeMetrics, Result, SearchTree,
    StateKeyOf,
};

pub type MCTSTree<E, S, A> = SearchTree<StateKeyOf<E, A>, S>;

/// Monte Carlo tree search with UCT selection and uniformly random playouts.
///
/// The tree is keyed by [`StateKey`](crate::StateKey), so statistics gathered from one root stay
/// valid when the same position is searched again, including positions reached by
/// transposition.
pub struct MCTS<'a, E, S, A>
where
    E: CanonicalBoard<State = S>,
{
    options: MCTSOptions,
    game_engine: &'a E,
    tree: MCTSTree<E, S, A>,
    rng: StdRng,
}

impl<'a, E, S, A> MCTS<'a, E, S, A>
where
    S: Clone + Debug,
    A: Clone + Debug + Hash + Ord,
    E: GameEngine<State = S, Action = A>
        + ValidActions<State = S, Action = A>
        + CanonicalBoard<State = S>,
{
    pub fn new(game_engine: &'a E, options: MCTSOptions) -> Self {
        let rng = create_rng_from_seed(options.seed);

        Self {
            options,
            game_engine,
            tree: SearchTree::new(),
            rng,
        }
    }

    pub fn options(&self) -> &MCTSOptions {
        &self.options
    }

    pub fn tree(&self) -> &MCTSTree<E, S, A> {
        &self.tree
    }

    /// Performs one select, expand, simulate and backpropagate pass starting at `root_state`.
    pub fn do_rollout(&mut self, root_state: &S) -> Result<()> {
        let root_key = key_of(self.game_engine, root_state);
        let root_id = self.tree.get_or_insert(root_key, root_state.clone())?;
        let root_player = self.game_engine.player_to_move(root_state);

        let path = self.select(root_id);
        let leaf_id = *path.last().unwrap_or(&root_id);

        self.expand(leaf_id)?;
        let reward = self.simulate(leaf_id, root_player)?;
        self.backpropagate(&path, reward);

        Ok(())
    }

    /// Runs exactly `rollouts` rollouts from `root_state`.
    pub fn search_rollouts(&mut self, root_state: &S, rollouts: usize) -> Result<usize> {
        for _ in 0..rollouts {
            self.do_rollout(root_state)?;
        }

        debug!(
            "Searched {} rollouts, tree size: {}",
            rollouts,
            self.tree.len()
        );

        Ok(rollouts)
    }

    /// Runs rollouts until `duration` has elapsed, always at least one. Returns the number of
    /// rollouts performed, which varies with the speed of the machine.
    pub fn search_time(&mut self, root_state: &S, duration: Duration) -> Result<usize> {
        let start = Instant::now();
        let mut rollouts = 0;

        loop {
            self.do_rollout(root_state)?;
            rollouts += 1;

            if start.elapsed() >= duration {
                break;
            }
        }

        debug!(
            "Searched {} rollouts in {:?}, tree size: {}",
            rollouts,
            start.elapsed(),
            self.tree.len()
        );

        Ok(rollouts)
    }

    /// Picks the move from `root_state` whose child has the highest average reward.
    ///
    /// Unvisited children are never preferred over visited ones. Ties, and the case where no
    /// child has been visited, go to the first child in legal move order.
    pub fn choose(&mut self, root_state: &S) -> Result<A> {
        let game_engine = self.game_engine;

        if game_engine.is_terminal_state(root_state) {
            return Err(MCTSError::IllegalState(
                "Cannot choose from a terminal state".to_string(),
            ));
        }

        let root_key = key_of(game_engine, root_state);
        let children = self
            .tree
            .get(&root_key)
            .and_then(|node| node.children())
            .ok_or_else(|| {
                MCTSError::NotExpanded("Root has no children. Run rollouts first.".to_string())
            })?;

        if let Some(best_child) = Self::best_child(&self.tree, children) {
            let best_key = self.tree.node(best_child).key();

            let best_action = game_engine.valid_actions(root_state).find(|action| {
                let next_state = game_engine.take_action(root_state, action);
                key_of(game_engine, &next_state) == *best_key
            });

            if let Some(action) = best_action {
                return Ok(action);
            }
        }

        warn!("No legal move leads to the best child. A random legal move will be selected.");

        let actions = game_engine.valid_actions(root_state).collect::<Vec<_>>();
        actions
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| MCTSError::InvariantViolation(Self::no_actions_message(root_state)))
    }

    /// Visit statistics of `root_state` and of the child reached by each legal move.
    pub fn root_metrics(&self, root_state: &S) -> Result<NodeMetrics<A>> {
        let game_engine = self.game_engine;
        let root_key = key_of(game_engine, root_state);

        let root = self
            .tree
            .get(&root_key)
            .filter(|node| node.is_expanded())
            .ok_or_else(|| MCTSError::NotExpanded(format!("{:?}", root_key)))?;

        let children = game_engine
            .valid_actions(root_state)
            .map(|action| {
                let child_key = key_of(game_engine, &game_engine.take_action(root_state, &action));
                let (visits, total_reward) = self
                    .tree
                    .get(&child_key)
                    .map_or((0, 0.0), |child| (child.visits(), child.total_reward()));

                EdgeMetrics::new(action, visits, total_reward)
            })
            .collect();

        Ok(NodeMetrics {
            visits: root.visits(),
            children,
        })
    }

    /// Sequence of best moves from `root_state`, following visited children only.
    pub fn principal_variation(&self, root_state: &S, max_depth: usize) -> Vec<A> {
        let game_engine = self.game_engine;
        let mut state = BorrowedOrOwned::Borrowed(root_state);
        let mut actions = vec![];

        while actions.len() < max_depth {
            let key = key_of(game_engine, &*state);
            let Some(children) = self.tree.get(&key).and_then(|node| node.children()) else {
                break;
            };

            let Some(best_child) = Self::best_child(&self.tree, children)
                .filter(|child| self.tree.node(*child).visits() > 0)
            else {
                break;
            };

            let best_key = self.tree.node(best_child).key();
            let next = game_engine.valid_actions(&state).find_map(|action| {
                let next_state = game_engine.take_action(&state, &action);
                (key_of(game_engine, &next_state) == *best_key).then_some((action, next_state))
            });

            let Some((action, next_state)) = next else {
                break;
            };

            actions.push(action);
            state = BorrowedOrOwned::Owned(next_state);
        }

        actions
    }

    fn select(&mut self, root_id: NodeId) -> Vec<NodeId> {
        let exploration_weight = self.options.exploration_weight;
        let mut path = vec![];
        let mut on_path = HashSet::new();
        let mut node_id = root_id;

        loop {
            path.push(node_id);
            on_path.insert(node_id);

            let children = match self.tree.node(node_id).children() {
                Some(children) if !children.is_empty() => children,
                _ => return path,
            };

            let unvisited = children
                .iter()
                .copied()
                .filter(|child| self.tree.node(*child).visits() == 0)
                .collect::<Vec<_>>();

            if let Some(child) = unvisited.choose(&mut self.rng) {
                path.push(*child);
                return path;
            }

            let next = Self::uct_select(&self.tree, node_id, children, exploration_weight);

            // A transposition led back onto the current path.
            if on_path.contains(&next) {
                return path;
            }

            node_id = next;
        }
    }

    fn expand(&mut self, node_id: NodeId) -> Result<()> {
        let game_engine = self.game_engine;
        let node = self.tree.node(node_id);

        if node.is_expanded() {
            return Ok(());
        }

        let state = node.state();

        if game_engine.is_terminal_state(state) {
            self.tree.expand_node(node_id, std::iter::empty())?;
            return Ok(());
        }

        let children = game_engine
            .valid_actions(state)
            .map(|action| {
                let next_state = game_engine.take_action(state, &action);
                (key_of(game_engine, &next_state), next_state)
            })
            .collect::<Vec<_>>();

        if children.is_empty() {
            return Err(MCTSError::InvariantViolation(Self::no_actions_message(state)));
        }

        self.tree.expand_node(node_id, children)?;

        Ok(())
    }

    /// Plays uniformly random moves until the game ends. The reward is always from the view of
    /// `root_player`.
    fn simulate(&mut self, node_id: NodeId, root_player: usize) -> Result<f32> {
        let game_engine = self.game_engine;
        let mut state = BorrowedOrOwned::Borrowed(self.tree.node(node_id).state());

        loop {
            if let Some(reward) = game_engine.utility(&state, root_player) {
                return Ok(reward);
            }

            let actions = game_engine.valid_actions(&state).collect::<Vec<_>>();
            let action = actions
                .choose(&mut self.rng)
                .ok_or_else(|| MCTSError::InvariantViolation(Self::no_actions_message(&state)))?;

            state = BorrowedOrOwned::Owned(game_engine.take_action(&state, action));
        }
    }

    /// Walks the path from leaf to root flipping the reward at each step.
    ///
    /// Every node accumulates reward for the player who moved into it. The simulated reward is
    /// for the root player, who moves into the odd depths, so a leaf at even depth starts from
    /// the flipped reward. Flipping from the raw reward at every leaf would invert the depth 1
    /// statistics whenever the leaf sits at an even depth.
    fn backpropagate(&mut self, path: &[NodeId], reward: f32) {
        let leaf_depth = path.len().saturating_sub(1);
        let mut reward = if leaf_depth % 2 == 1 {
            reward
        } else {
            1.0 - reward
        };

        for node_id in path.iter().rev() {
            self.tree.record_node_visit(*node_id, reward);
            reward = 1.0 - reward;
        }
    }

    /// Requires every child to have been visited at least once.
    fn uct_select(
        tree: &MCTSTree<E, S, A>,
        node_id: NodeId,
        children: &[NodeId],
        exploration_weight: f32,
    ) -> NodeId {
        let log_parent_visits = (tree.node(node_id).visits() as f32).ln();

        let mut best_child = children[0];
        let mut best_uct = f32::MIN;

        for child in children {
            let node = tree.node(*child);
            let visits = node.visits() as f32;
            let uct = node.total_reward() / visits
                + exploration_weight * (log_parent_visits / visits).sqrt();

            if uct > best_uct {
                best_uct = uct;
                best_child = *child;
            }
        }

        best_child
    }

    /// Child with the highest `Q/N`, unvisited children scoring negative infinity. The first
    /// child wins ties.
    fn best_child(tree: &MCTSTree<E, S, A>, children: &[NodeId]) -> Option<NodeId> {
        let score = |child: NodeId| {
            tree.node(child)
                .average_reward()
                .unwrap_or(f32::NEG_INFINITY)
        };

        let (&first, rest) = children.split_first()?;
        let mut best_child = first;
        let mut best_score = score(first);

        for child in rest {
            let child_score = score(*child);
            if child_score > best_score {
                best_score = child_score;
                best_child = *child;
            }
        }

        Some(best_child)
    }

    fn no_actions_message(game_state: &S) -> String {
        format!("Non-terminal state has no legal moves: {:?}", game_state)
    }
}
