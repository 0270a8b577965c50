pub mod coreext;
