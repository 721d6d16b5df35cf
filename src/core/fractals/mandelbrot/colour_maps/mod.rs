pub mod modulo_palette;
