pub mod tsp;
