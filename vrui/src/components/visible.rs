/// The Visibility component determines whether a given entity is shown or hidden within the world.
///
/// A `Pointer` without this component can't cast rays, so hiding the pointer disables UI input.
///
/// Basic usage:
/// ```ignore
/// world.insert_one(entity, Visible {})
/// world.remove_one::<Visible>(entity)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Visible {}
