/*!

This is the long-form manual for `survey_charts` and `surveydash`.

## Input data

One file per survey year. The name of the file (without extension) is the year,
unless the configuration file names it explicitly.

The following formats are supported:
* `csv` Comma Separated Values, as exported by the survey tool
* `xlsx` Excel spreadsheets, the first worksheet unless another one is named

The first row holds the full question texts. Each question text is mapped to a
column key (`ageGroup`, `participatedInTraining`, ...). Some questions appear several
times with the same text, for example the country of residence: they are mapped
from left to right. Rows that are entirely empty are skipped, and a missing cell
reads as an empty answer.

## Answers

Answers are compared after collapsing whitespace, and most of them case-insensitively.
The answer `n/a` (in any case) means that the respondent did not answer.

A checkbox question is spread over one column per option, each holding `Yes` or `No`.
A respondent answered such a question when:
- at least one option is `Yes`, or
- every option is explicitly `No`, or
- the free-text "other" field holds something.

Blank options are not the same as options marked `No`: a respondent that left
everything blank is not counted at all.

## Charts

Every chart has an identifier, listed by `surveydash --list`. A chart is defined by:
- the preconditions a respondent must meet to be eligible (for example having
  participated in a training),
- an optional grouping dimension (age group, region, role, ...),
- the answers that are counted,
- the denominator used for percentages.

Two denominators are used:

| denominator | percentage of                                   |
|-------------|-------------------------------------------------|
| global      | everyone that answered, across all the groups   |
| group-local | everyone that answered within the same group    |

The statistics of a chart report the number of respondents that answered (`numberOfResponses`)
and, for charts with preconditions, the number of eligible respondents (`totalEligible`).

### Regions

Countries are mapped to `DACH`, `Rest of Europe`, `North America`, `Asia`, `South America`,
`Africa`, `Oceania`. Unknown countries are reported under `Other`. Names must match exactly
(case-insensitive): `Germany (Berlin)` is reported under `Other`.

### Roles

Free-text roles are categorized by keyword, in this order: `RE`, `Management`, `Tech`,
`Research`. The first category with a matching keyword wins.

## Comparing years

When a comparison year is given, each chart that supports it is rendered with one of
these strategies:
- `dumbbell`: one line per label, from the value of the comparison year to the
  value of the current year
- `horizontal bar`: two bars per label
- `yes / no / not sure`: grouped vertical bars
- `stacked bar`: the stacked bars of both years next to each other
- `scatter plot`: one point per label, the comparison year on the x axis

Labels that appear in only one of the years are shown with a value of 0 for the other year.

*/
