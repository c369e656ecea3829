use std::fmt::{self, Debug, Display, Formatter};

/// Visit statistics of a root and its children, children in legal move order.
#[derive(Clone, PartialEq)]
pub struct NodeMetrics<A> {
    pub visits: u32,
    pub children: Vec<EdgeMetrics<A>>,
}

#[derive(Clone, PartialEq)]
pub struct EdgeMetrics<A> {
    pub action: A,
    pub visits: u32,
    pub total_reward: f32,
}

impl<A> EdgeMetrics<A> {
    pub fn new(action: A, visits: u32, total_reward: f32) -> Self {
        Self {
            action,
            visits,
            total_reward,
        }
    }

    pub fn avg_reward(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / self.visits as f32
        }
    }
}

impl<A: Display> Display for NodeMetrics<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let actions = format!(
            "[{}]",
            self.children
                .iter()
                .fold(String::new(), |acc, edge| acc + &format!("\n\t({}),", edge))
        );

        write!(
            f,
            "N: {visits}, Actions: {actions}",
            visits = self.visits,
            actions = actions
        )
    }
}

impl<A: Display> Debug for NodeMetrics<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl<A: Display> Display for EdgeMetrics<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "A: {action}, N: {visits}, Q: {total_reward:.2}, Q/N: {avg:.3}",
            action = self.action,
            visits = self.visits,
            total_reward = self.total_reward,
            avg = self.avg_reward()
        )
    }
}

impl<A: Display> Debug for EdgeMetrics<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}
