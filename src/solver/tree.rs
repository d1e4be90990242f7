use crate::state::{NodeId, State};

/// Owns every state created during one search.
/// Parents are indices so the whole tree is dropped at once.
#[derive(Debug, Default)]
pub(crate) struct SearchTree {
    states: Vec<State>,
}

impl SearchTree {
    pub(crate) fn new() -> Self {
        SearchTree { states: Vec::new() }
    }

    pub(crate) fn add(&mut self, state: State) -> NodeId {
        self.states.push(state);
        NodeId(self.states.len() - 1)
    }

    pub(crate) fn get(&self, id: NodeId) -> &State {
        &self.states[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    /// States from the root to `last`, both included.
    pub(crate) fn path_to(&self, last: NodeId) -> Vec<State> {
        let mut ret = Vec::new();
        let mut cur = Some(last);
        while let Some(id) = cur {
            let state = self.get(id);
            ret.push(state.clone());
            cur = state.parent;
        }
        ret.reverse();
        ret
    }
}
