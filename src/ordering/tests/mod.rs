mod topological;
