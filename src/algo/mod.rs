/*!
# Graph Algorithms

Traversal, shortest paths and spanning forests, built on top of the ops
layer. Algorithm traits are implemented on the graphs themselves, so after
```rust
use wgraphs::{prelude::*, algo::*};
```
you can call `graph.bfs(&root)`, `graph.shortest_path(&u, &v)` or
`graph.minimum_spanning_forest()` directly.
*/

mod shortest_path;
mod spanning;
mod traversal;
mod union_find;

use crate::{edge::*, error::*, ops::*, vertex::*};

pub use shortest_path::*;
pub use spanning::*;
pub use traversal::*;
pub use union_find::*;
