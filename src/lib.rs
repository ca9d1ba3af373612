pub mod game_repr;
