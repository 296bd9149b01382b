mod leaderboard_walkthrough;
mod session_flow;
