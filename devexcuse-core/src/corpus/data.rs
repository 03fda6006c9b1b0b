use super::ExcuseRecord;

/// Excuses shipped with the binary, grouped by category.
const EXCUSES: &[(&str, &str)] = &[
    ("It works on my machine.", "classic"),
    ("That's weird... it worked yesterday.", "classic"),
    ("I can't reproduce it.", "classic"),
    ("You must have a different version.", "classic"),
    ("I'm sure I fixed that.", "classic"),
    ("This is a known issue.", "classic"),
    ("Try clearing your cache.", "classic"),
    ("You need to reboot.", "classic"),
    ("Must be a race condition.", "classic"),
    ("It's a feature, not a bug.", "classic"),
    ("I didn't write that part of the code.", "blame"),
    ("The intern must have done it.", "blame"),
    ("That's a third-party issue.", "blame"),
    ("The specs weren't clear.", "blame"),
    ("It's the designer's fault.", "blame"),
    ("QA missed it.", "blame"),
    ("Management said to ship it.", "blame"),
    ("I copied it from Stack Overflow.", "blame"),
    ("The client wanted it this way.", "blame"),
    ("My cat walked on the keyboard.", "blame"),
    ("Must be a hardware issue.", "hardware"),
    ("The server ran out of RAM.", "hardware"),
    ("There was a power surge.", "hardware"),
    ("The fans were too loud.", "hardware"),
    ("Maybe it's a bad sector.", "hardware"),
    ("Thermal throttling kicked in.", "hardware"),
    ("Hard drive's making weird noises.", "hardware"),
    ("GPU is overheating.", "hardware"),
    ("Keyboard must be faulty.", "hardware"),
    ("Monitor lag made me click wrong.", "hardware"),
    ("Must be a DNS issue.", "network"),
    ("The VPN is acting up.", "network"),
    ("Packet loss, obviously.", "network"),
    ("The firewall is blocking it.", "network"),
    ("Router needs restarting.", "network"),
    ("ISP is throttling us again.", "network"),
    ("It works on localhost.", "network"),
    ("There's a NAT conflict.", "network"),
    ("We're behind a proxy.", "network"),
    ("It's not reachable from here.", "network"),
    ("The AI hallucinated.", "AI"),
    ("The model overfit.", "AI"),
    ("That's just how the weights settled.", "AI"),
    ("The data was biased.", "AI"),
    ("Blame the training set.", "AI"),
    ("The model has its own opinion.", "AI"),
    ("ML is more art than science.", "AI"),
    ("It's not deterministic.", "AI"),
    ("Neural net said 'no'.", "AI"),
    ("The GPU isn't CUDA-compatible.", "AI"),
    ("It's a CSS issue.", "frontend"),
    ("It works in Chrome.", "frontend"),
    ("Must be a browser quirk.", "frontend"),
    ("It's responsive… kinda.", "frontend"),
    ("Pixel-perfect wasn't in scope.", "frontend"),
    ("JavaScript is being weird.", "frontend"),
    ("React updated its hooks again.", "frontend"),
    ("Tailwind broke the layout.", "frontend"),
    ("State management is hard.", "frontend"),
    ("Dark mode is glitching.", "frontend"),
    ("It's a caching issue.", "backend"),
    ("Race condition again.", "backend"),
    ("Database locked the table.", "backend"),
    ("It passed in staging.", "backend"),
    ("JWT expired too soon.", "backend"),
    ("Timezone madness.", "backend"),
    ("The API was rate-limited.", "backend"),
    ("I forgot to await the promise.", "backend"),
    ("Session token got invalidated.", "backend"),
    ("The cron job ran twice.", "backend"),
    ("Wrong DB column.", "database"),
    ("Indexing is broken.", "database"),
    ("Foreign key constraint failed.", "database"),
    ("I forgot the WHERE clause.", "database"),
    ("Transaction didn't commit.", "database"),
    ("We hit the row limit.", "database"),
    ("I dropped the table by mistake.", "database"),
    ("The dump file was corrupted.", "database"),
    ("Primary key collision.", "database"),
    ("Stored procedure went rogue.", "database"),
    ("I thought we had tests for that.", "testing"),
    ("The test suite passed on my branch.", "testing"),
    ("I disabled that test temporarily.", "testing"),
    ("That's not in the test plan.", "testing"),
    ("Mock data wasn't realistic.", "testing"),
    ("Test coverage isn't everything.", "testing"),
    ("I tested it manually.", "testing"),
    ("CI server is down.", "testing"),
    ("I pushed with --no-verify.", "testing"),
    ("The test environment is flaky.", "testing"),
    ("I deployed to the wrong server.", "devops"),
    ("CI/CD didn't trigger.", "devops"),
    ("Wrong `.env` file.", "devops"),
    ("I forgot to `npm install`.", "devops"),
    ("Docker image was outdated.", "devops"),
    ("I was on the wrong git branch.", "devops"),
    ("Rollback failed.", "devops"),
    ("Kubernetes restarted it.", "devops"),
    ("Wrong build artifact.", "devops"),
    ("AWS credentials expired.", "devops"),
    ("It compiled. That's a win.", "misc"),
    ("It's probably solar flares.", "misc"),
    ("Aliens modified the code.", "misc"),
    ("The code is self-aware.", "misc"),
    ("I wasn't caffeinated enough.", "misc"),
    ("I'm debugging in production.", "misc"),
    ("Too many tabs open.", "misc"),
    ("I need a rubber duck.", "misc"),
    ("The code is quantum entangled.", "misc"),
    ("The keyboard layout changed.", "misc"),
    ("I deleted production.", "devil"),
    ("The WiFi dropped right before I hit save.", "network"),
    ("The code works, but only on Fridays.", "classic"),
    ("I was testing in production by accident.", "devops"),
    ("The requirements changed overnight.", "blame"),
    ("The debugger skipped that line for some reason.", "testing"),
    ("The API docs were outdated.", "backend"),
    ("I thought you were handling that part.", "blame"),
    ("The linter didn't catch it.", "testing"),
    ("It's a timezone thing.", "backend"),
    ("The cloud provider had an outage.", "devops"),
    ("The build server ran out of disk space.", "devops"),
    ("I forgot to push my latest changes.", "classic"),
    ("The merge conflict was resolved incorrectly.", "classic"),
    ("The code review missed it.", "blame"),
    ("The API key expired.", "backend"),
    ("The database is in read-only mode.", "database"),
    ("The test data was too realistic.", "testing"),
    ("The staging environment is different from production.", "devops"),
    ("The cache wasn't cleared.", "backend"),
    ("The feature flag was off.", "devops"),
    ("The code was working before the update.", "classic"),
    ("The error logs rotated before I could check them.", "devops"),
    ("The backup failed last night.", "devops"),
    ("The endpoint changed without notice.", "backend"),
    ("The user story was ambiguous.", "blame"),
    ("The sprint was too short.", "blame"),
    ("The hardware vendor changed the specs.", "hardware"),
    ("The network cable was unplugged.", "hardware"),
    ("The firewall rules changed.", "network"),
    ("The DNS cache is stale.", "network"),
    ("The AI model is still training.", "AI"),
    ("The neural net weights were corrupted.", "AI"),
    ("The CSS specificity is too high.", "frontend"),
    ("The browser autofilled the wrong value.", "frontend"),
    ("The JavaScript minifier broke the code.", "frontend"),
    ("The backend returned HTML instead of JSON.", "backend"),
    ("The database migration didn't run.", "database"),
    ("The stored procedure was deprecated.", "database"),
    ("The test runner skipped that test.", "testing"),
    ("The mock server was down.", "testing"),
    ("The CI pipeline was paused.", "devops"),
    ("The deployment script had a typo.", "devops"),
    ("The timezone was set to UTC+13.", "backend"),
    ("The API rate limit was exceeded.", "backend"),
    ("The session expired too soon.", "backend"),
    ("The config file was missing.", "devops"),
    ("The environment variable wasn't set.", "devops"),
    ("The code was optimized away.", "classic"),
    ("The feature was behind a paywall.", "misc"),
    ("The user clicked too fast.", "frontend"),
    ("The browser extension interfered.", "frontend"),
    ("The GPU driver crashed.", "hardware"),
    ("The RAM was maxed out.", "hardware"),
    ("The power supply was unstable.", "hardware"),
    ("The router firmware was outdated.", "network"),
    ("The proxy server was misconfigured.", "network"),
    ("The AI model was over-regularized.", "AI"),
    ("The training data was incomplete.", "AI"),
    ("The CSS file didn't load.", "frontend"),
    ("The npm package was unpublished.", "devops"),
    ("The cron job was disabled.", "devops"),
    ("The database index was missing.", "database"),
    ("The test coverage report was ignored.", "testing"),
    ("The code was written in a hurry.", "classic"),
    ("The requirements were lost in translation.", "blame"),
    ("The code was copied from an old project.", "classic"),
    ("The API version was deprecated.", "backend"),
    ("The server clock was wrong.", "devops"),
    ("The user's device was out of storage.", "hardware"),
    ("The cloud region was unavailable.", "devops"),
];

pub(super) fn builtin_records() -> Vec<ExcuseRecord> {
    EXCUSES
        .iter()
        .map(|(text, category)| ExcuseRecord::new(*text, *category))
        .collect()
}
