pub use hexagon_mesh::hexagon_mesh;

mod hexagon_mesh;
