//! Command types for the Elm-style architecture
//!
//! Commands are requests from the model to the host surface.

/// Commands returned by [`crate::update::update`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Ask the host for the next refresh opportunity
    ScheduleRedraw,
    /// Resize the presentation surface to the given device-pixel size
    ResizeSurface { width: u32, height: u32 },
    /// Present the model's pixel buffer at the surface origin
    Present,
    /// Clear the presentation surface
    ClearSurface,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Collapse a list of commands, avoiding single-element batches
    pub fn batch(mut cmds: Vec<Cmd>) -> Cmd {
        cmds.retain(|c| *c != Cmd::None);
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Flatten nested batches into a list
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_collapses() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::Present]), Cmd::Present);
        assert_eq!(
            Cmd::batch(vec![Cmd::ClearSurface, Cmd::Present]),
            Cmd::Batch(vec![Cmd::ClearSurface, Cmd::Present])
        );
    }

    #[test]
    fn test_flatten_nested() {
        let cmd = Cmd::Batch(vec![
            Cmd::ResizeSurface {
                width: 1,
                height: 2,
            },
            Cmd::Batch(vec![Cmd::Present]),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![
                Cmd::ResizeSurface {
                    width: 1,
                    height: 2
                },
                Cmd::Present
            ]
        );
    }
}
