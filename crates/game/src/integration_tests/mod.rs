mod undo;
