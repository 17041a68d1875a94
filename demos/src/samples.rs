// SPDX-License-Identifier: Apache-2.0

//! Built-in documents run by `rdjson-dump --samples`.
//!
//! The list mixes well-formed documents with every failure class so a single
//! run shows the whole range of reports.

pub const SAMPLES: &[&str] = &[
    "",
    "   true      ",
    "true",
    "false   ",
    "  null ",
    "   hello   ",
    "  3 ",
    " 13  ",
    "\n\n 343.234  \n",
    "  -2.5E+14",
    "   43.000e-3  ",
    "  021  ",
    "  -   ",
    "\"hello world\"",
    "   \"\"  ",
    "  \"  \\\" \"",
    "  \"  hello\\nworld\"",
    "\"  hello\\tworld\"",
    "\"  hello\\n\\tworld\\\\\"",
    "\" \\u3424  \"",
    "\"          test  ",
    "    true   ",
    "              false           ",
    "      null ",
    "  -12 ",
    "      234.01  ",
    "   0 ",
    "       345.3457E32    ",
    "          -43.32e-23   ",
    "  6.02e23    ",
    "      1.602E-19",
    "      3e20 ",
    "\"Hello world\"",
    "    \"    Hello \\n     \"   ",
    "          \"   ,    \\u3333    \\n \\\\   \\\"  \"   ",
    "   \"\"   ",
    "          \" fjfkdsjfdsl",
    "              \"\"\"   ",
    "      true  \" fdsf ",
    "      \"   \\a   \"  ",
    "{ \"member\"  :   \"Hello world\" }   ",
    "{     }",
    "   { \"member\"  : { \"haha\" : \"mom\" }   , \"pi\"   : 3.14 }   ",
    "  { \"member\" : \"Hello\", } ",
    "   { true:     { }   }",
    "[   \"Hello\"   , \" world   \"   ]",
    "   [   {  \"m\": 3  },  3.4e32  ]  ",
    "   [  \"string\", true, false, 3.14, null, {}  ]  ",
    "   [   \"  fail   \"   , false  , null   ,  ]   ",
    "   [   \" fail \",    \" suspend ]",
    "   [   \"  fail   \"   , false  , null     ]   ",
    "[ \"fail\", \"etc\"",
];
