mod create_and_modify;
mod randomness;
