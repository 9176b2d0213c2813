use crate::model::Flow;

/// Processor status tallies and connection count for a flow.
///
/// Statuses other than the exact strings `"running"` and `"stopped"` are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowStatistics {
    pub running: usize,
    pub stopped: usize,
    pub connections: usize,
}

impl FlowStatistics {
    pub fn from_flow(flow: &Flow) -> Self {
        let mut stats = Self {
            connections: flow.connections.len(),
            ..Self::default()
        };
        for processor in &flow.processors {
            if processor.is_running() {
                stats.running += 1;
            } else if processor.is_stopped() {
                stats.stopped += 1;
            }
        }
        stats
    }
}
