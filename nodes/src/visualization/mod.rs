pub mod nodes_vis2d;
